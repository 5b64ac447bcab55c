use serde_json::{json, Value};

use super::{BlazeClient, Result};

impl BlazeClient {
    /// Shows the account's remaining build credits.
    pub async fn view_credits(&self) -> Result<Value> {
        self.authorized("credits/view", &json!({})).await
    }
}
