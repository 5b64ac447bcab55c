use serde::Serialize;
use serde_json::{json, Value};

use super::{BlazeClient, ResourceId, Result};

#[derive(Serialize)]
struct EditMasterFileBody<'a> {
    id: ResourceId,
    content: &'a str,
}

impl BlazeClient {
    /// Replaces the full contents of a master file.
    pub async fn edit_master_file(&self, id: impl Into<ResourceId>, content: &str) -> Result<Value> {
        let body = EditMasterFileBody {
            id: id.into(),
            content,
        };
        self.authorized("masterFiles/edit", &body).await
    }

    pub async fn view_master_file(&self, id: impl Into<ResourceId>) -> Result<Value> {
        let id: ResourceId = id.into();
        self.authorized("masterFiles/view", &json!({ "id": id })).await
    }

    /// Lists the master files belonging to a repository.
    pub async fn list_master_files(&self, repo_id: impl Into<ResourceId>) -> Result<Value> {
        let repo_id: ResourceId = repo_id.into();
        self.authorized("masterFiles/list", &json!({ "repoID": repo_id })).await
    }
}
