use serde::Serialize;
use serde_json::Value;

use super::{BlazeClient, Result};

#[derive(Serialize)]
struct SignupBody<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "betaKey")]
    beta_key: &'a str,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

impl BlazeClient {
    /// Registers a new account. A token in the response becomes the session token.
    pub async fn signup(&self, email: &str, password: &str, beta_key: &str) -> Result<Value> {
        self.authenticate(
            "users/signup",
            &SignupBody {
                email,
                password,
                beta_key,
            },
        )
        .await
    }

    /// Logs in. A token in the response becomes the session token.
    pub async fn login(&self, email: &str, password: &str) -> Result<Value> {
        self.authenticate("users/login", &LoginBody { email, password })
            .await
    }
}
