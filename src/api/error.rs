use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Possible errors while talking to the Blaze API.
///
/// Application-level failures are not represented here: the service reports
/// those inside its JSON response, which is handed back to the caller as-is.
#[derive(Debug, Error)]
pub enum BlazeError {
    /// The request never completed, or its body could not be read.
    #[error("request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid JSON from server: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("failed to encode request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The cached token cannot be placed in an `Authorization` header.
    #[error("token is not a valid header value: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, BlazeError>;
