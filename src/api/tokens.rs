use serde_json::{json, Value};

use super::{BlazeClient, ResourceId, Result};

// These manage long-lived API tokens on the account.
// They never touch the client's own session token.
impl BlazeClient {
    pub async fn add_token(&self, name: &str) -> Result<Value> {
        self.authorized("tokens/add", &json!({ "name": name })).await
    }

    pub async fn remove_token(&self, id: impl Into<ResourceId>) -> Result<Value> {
        let id: ResourceId = id.into();
        self.authorized("tokens/remove", &json!({ "id": id })).await
    }

    pub async fn view_token(&self, id: impl Into<ResourceId>) -> Result<Value> {
        let id: ResourceId = id.into();
        self.authorized("tokens/view", &json!({ "id": id })).await
    }

    pub async fn list_tokens(&self) -> Result<Value> {
        self.authorized("tokens/list", &json!({})).await
    }
}
