use serde_json::{json, Value};

use super::{BlazeClient, ResourceId, Result, RunJob};

impl BlazeClient {
    /// Starts `job.task` on `job.branch` of a registered repository.
    pub async fn run_job(&self, job: RunJob) -> Result<Value> {
        self.authorized("jobs/run", &job).await
    }

    pub async fn stop_job(&self, job_id: impl Into<ResourceId>) -> Result<Value> {
        let job_id: ResourceId = job_id.into();
        self.authorized("jobs/stop", &json!({ "jobID": job_id })).await
    }

    /// Runs a finished or stopped job again with its original parameters.
    pub async fn rerun_job(&self, job_id: impl Into<ResourceId>) -> Result<Value> {
        let job_id: ResourceId = job_id.into();
        self.authorized("jobs/rerun", &json!({ "jobID": job_id })).await
    }

    pub async fn view_job(&self, id: impl Into<ResourceId>) -> Result<Value> {
        let id: ResourceId = id.into();
        self.authorized("jobs/view", &json!({ "id": id })).await
    }

    pub async fn list_jobs(&self) -> Result<Value> {
        self.authorized("jobs/list", &json!({})).await
    }
}
