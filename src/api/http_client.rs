use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use serde::Serialize;
use url::Url;

use super::{BlazeError, Result};

/// A single API call, assembled before anything touches the network.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Path relative to the API base, e.g. `keys/list`.
    pub endpoint: &'static str,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

impl ApiRequest {
    /// Every Blaze endpoint is a JSON POST.
    pub fn post<T: Serialize>(endpoint: &'static str, body: &T) -> Result<Self> {
        let body = serde_json::to_value(body).map_err(BlazeError::Serialize)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            endpoint,
            headers,
            body,
        })
    }

    /// Attaches `Authorization: Bearer <token>`.
    /// An absent or empty token leaves the request unauthenticated.
    pub fn bearer(mut self, token: Option<&str>) -> Result<Self> {
        let Some(token) = token.filter(|token| !token.is_empty()) else {
            return Ok(self);
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
        value.set_sensitive(true);
        self.headers.insert(AUTHORIZATION, value);
        Ok(self)
    }

    pub fn is_authorized(&self) -> bool {
        self.headers.contains_key(AUTHORIZATION)
    }

    /// Resolves the endpoint against `api_base` and builds the transport request.
    pub fn into_reqwest(self, http: &reqwest::Client, api_base: &Url) -> Result<reqwest::Request> {
        let url = api_base.join(self.endpoint)?;
        let posted_contents = serde_json::to_string(&self.body).map_err(BlazeError::Serialize)?;

        let request = http
            .request(Method::POST, url)
            .headers(self.headers)
            .body(posted_contents)
            .build()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("https://api.blaze.engineer/").unwrap()
    }

    #[test]
    fn test_post_sets_json_content_type() {
        let request = ApiRequest::post("keys/list", &json!({})).unwrap();
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        assert!(!request.is_authorized());
        assert_eq!(request.body, json!({}));
    }

    #[test]
    fn test_bearer_adds_sensitive_header() {
        let request = ApiRequest::post("keys/list", &json!({}))
            .unwrap()
            .bearer(Some("T1"))
            .unwrap();
        let value = &request.headers[AUTHORIZATION];
        assert_eq!(value, "Bearer T1");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_bearer_skips_missing_or_empty_token() {
        let none = ApiRequest::post("keys/list", &json!({}))
            .unwrap()
            .bearer(None)
            .unwrap();
        assert!(!none.is_authorized());

        let empty = ApiRequest::post("keys/list", &json!({}))
            .unwrap()
            .bearer(Some(""))
            .unwrap();
        assert!(!empty.is_authorized());
    }

    #[test]
    fn test_bearer_rejects_header_breaking_token() {
        let result = ApiRequest::post("keys/list", &json!({}))
            .unwrap()
            .bearer(Some("bad\ntoken"));
        assert!(matches!(result, Err(BlazeError::InvalidToken(_))));
    }

    #[test]
    fn test_into_reqwest_resolves_endpoint_and_body() {
        let http = reqwest::Client::new();
        let request = ApiRequest::post("users/login", &json!({"email": "a@b.com", "password": "pw"}))
            .unwrap()
            .into_reqwest(&http, &base())
            .unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "https://api.blaze.engineer/users/login");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");

        let body = request.body().and_then(|body| body.as_bytes()).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(parsed, json!({"email": "a@b.com", "password": "pw"}));
    }
}
