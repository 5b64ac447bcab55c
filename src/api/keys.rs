use serde::Serialize;
use serde_json::{json, Value};

use super::{BlazeClient, ResourceId, Result};

#[derive(Serialize)]
struct AddKeyBody<'a> {
    name: &'a str,
    key: &'a str,
}

impl BlazeClient {
    /// Uploads an SSH public key under a display name.
    pub async fn add_key(&self, name: &str, key: &str) -> Result<Value> {
        self.authorized("keys/add", &AddKeyBody { name, key }).await
    }

    pub async fn remove_key(&self, id: impl Into<ResourceId>) -> Result<Value> {
        let id: ResourceId = id.into();
        self.authorized("keys/remove", &json!({ "id": id })).await
    }

    pub async fn list_keys(&self) -> Result<Value> {
        self.authorized("keys/list", &json!({})).await
    }
}
