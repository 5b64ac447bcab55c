use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::{http_client::ApiRequest, BlazeError, Result};
use crate::config::{normalize_base, Config};

/// Client for the Blaze API.
///
/// Holds the transport, the API base and the session token. Calls only need
/// `&self`, so a single client can be shared across tasks. Token writes are
/// last-writer-wins.
#[derive(Debug)]
pub struct BlazeClient {
    http: reqwest::Client,
    api_base: Url,
    /// The session token sent with authorized requests.
    token: RwLock<Option<String>>,
}

impl BlazeClient {
    /// Creates a client against the production API.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Creates a client against a different API root, e.g. a staging or mock server.
    pub fn with_base_url(api_base: &str) -> Result<Self> {
        Self::with_config(Config::default().with_api_base(api_base)?)
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            // The field is public, so it may not have gone through `with_api_base`.
            api_base: normalize_base(config.api_base),
            token: RwLock::new(config.token),
        })
    }

    /// The root every endpoint is resolved against. Always ends in `/`.
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// The currently cached session token.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the cached session token.
    pub fn set_token(&self, token: impl Into<String>) {
        self.store_token(Some(token.into()));
    }

    /// Forgets the cached session token. Authorized calls go out without one.
    pub fn clear_token(&self) {
        self.store_token(None);
    }

    fn store_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Sends an unauthenticated request, caching any session token returned.
    pub(crate) async fn authenticate<T: Serialize>(
        &self,
        endpoint: &'static str,
        body: &T,
    ) -> Result<Value> {
        let response = self.send(ApiRequest::post(endpoint, body)?).await?;

        // Only a non-empty string counts as a token.
        // Anything else leaves the current session alone.
        if let Some(token) = response
            .get("token")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
        {
            tracing::debug!(endpoint, "Cached session token");
            self.set_token(token);
        }

        Ok(response)
    }

    /// Sends a request carrying the cached session token, if there is one.
    pub(crate) async fn authorized<T: Serialize>(
        &self,
        endpoint: &'static str,
        body: &T,
    ) -> Result<Value> {
        let token = self.token();
        if token.is_none() {
            tracing::debug!(endpoint, "No session token cached; sending without authorization");
        }

        let request = ApiRequest::post(endpoint, body)?.bearer(token.as_deref())?;
        self.send(request).await
    }

    /// Executes the request and parses the response body as JSON.
    ///
    /// The status code is not interpreted: the service describes its own
    /// failures in the body, and that body is what the caller receives.
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let endpoint = request.endpoint;
        tracing::debug!(endpoint, authorized = request.is_authorized(), "Sending request");

        let request = request.into_reqwest(&self.http, &self.api_base)?;
        let response = self.http.execute(request).await?;

        let status = response.status();
        tracing::debug!(endpoint, status = status.as_u16(), "Received response");
        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "Blaze API returned an error status");
        }

        let response_text = response.text().await?;
        serde_json::from_str(&response_text).map_err(BlazeError::InvalidJson)
    }
}
