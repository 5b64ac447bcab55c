use std::{env, time::Duration};

use url::Url;

use crate::api::Result;

/// The production API root. All endpoints are resolved relative to it.
pub const DEFAULT_API_BASE: &str = "https://api.blaze.engineer/";

/// Overrides the API root when set.
pub const API_BASE_ENV: &str = "BLAZE_API_BASE";

/// Seeds the session token when set.
pub const TOKEN_ENV: &str = "BLAZE_TOKEN";

/// Settings used to construct a [`BlazeClient`](crate::BlazeClient).
#[derive(Debug, Clone)]
pub struct Config {
    /// Root every endpoint path is joined onto.
    /// The client appends a trailing `/` if the path lacks one.
    pub api_base: Url,
    pub user_agent: String,
    /// Per-request timeout. `None` waits for as long as the transport does.
    pub timeout: Option<Duration>,
    /// Session token to start with, as if `set_token` had been called.
    pub token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base should be a valid URL"),
            user_agent: format!("blaze-engineer/{}", env!("CARGO_PKG_VERSION")),
            timeout: None,
            token: None,
        }
    }
}

impl Config {
    /// Defaults, overridden by `BLAZE_API_BASE` and `BLAZE_TOKEN` where present.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`], reading variables through `lookup`.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let mut config = Self::default();
        if let Some(api_base) = non_empty(API_BASE_ENV) {
            config = config.with_api_base(&api_base)?;
        }
        if let Some(token) = non_empty(TOKEN_ENV) {
            config = config.with_token(token);
        }
        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: &str) -> Result<Self> {
        self.api_base = normalize_base(Url::parse(api_base)?);
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// `Url::join` replaces the last path segment unless the base ends in `/`,
/// which would turn `https://host/v1` + `keys/list` into `https://host/keys/list`.
pub(crate) fn normalize_base(mut api_base: Url) -> Url {
    if !api_base.path().ends_with('/') {
        let path = format!("{}/", api_base.path());
        api_base.set_path(&path);
    }
    api_base
}
