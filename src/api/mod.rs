mod client;
mod credits;
mod error;
mod http_client;
mod jobs;
mod keys;
mod master_files;
mod repos;
mod tokens;
mod types;
mod users;

pub use client::BlazeClient;
pub use error::{BlazeError, Result};
pub use types::{ResourceId, RunJob};
