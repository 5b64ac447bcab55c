use serde::Serialize;
use serde_json::{json, Value};

use super::{BlazeClient, ResourceId, Result};

#[derive(Serialize)]
struct AddRepoBody<'a> {
    name: &'a str,
    #[serde(rename = "sshURL")]
    ssh_url: &'a str,
    #[serde(rename = "keyID")]
    key_id: ResourceId,
}

impl BlazeClient {
    /// Registers a repository, cloned over SSH with a previously added key.
    pub async fn add_repo(
        &self,
        name: &str,
        ssh_url: &str,
        key_id: impl Into<ResourceId>,
    ) -> Result<Value> {
        let body = AddRepoBody {
            name,
            ssh_url,
            key_id: key_id.into(),
        };
        self.authorized("repos/add", &body).await
    }

    pub async fn remove_repo(&self, id: impl Into<ResourceId>) -> Result<Value> {
        let id: ResourceId = id.into();
        self.authorized("repos/remove", &json!({ "id": id })).await
    }

    pub async fn list_repos(&self) -> Result<Value> {
        self.authorized("repos/list", &json!({})).await
    }
}
