//! Async client for the Blaze CI/build service.
//!
//! Every call is a JSON `POST` against the API base. Signup and login cache the
//! returned session token, and every other call sends it back as a bearer token.
//!
//! ```no_run
//! # async fn demo() -> blaze_engineer::Result<()> {
//! use blaze_engineer::{BlazeClient, RunJob};
//!
//! let client = BlazeClient::new()?;
//! client.login("a@b.com", "pw").await?;
//! let keys = client.list_keys().await?;
//! println!("{keys}");
//!
//! client
//!     .run_job(RunJob::new("repo-1", "main", "test").webhook("https://example.com/hook"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod config;

pub use api::{BlazeClient, BlazeError, ResourceId, Result, RunJob};
pub use config::{Config, API_BASE_ENV, DEFAULT_API_BASE, TOKEN_ENV};
