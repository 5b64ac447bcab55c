use std::fmt;

use serde::Serialize;

/// Identifies a key, repo, job, token or master file.
///
/// The service owns the format, so both textual and numeric ids are passed
/// through exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ResourceId {
    Text(String),
    Number(u64),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceId::Text(id) => f.write_str(id),
            ResourceId::Number(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        ResourceId::Text(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        ResourceId::Text(id)
    }
}

impl From<&String> for ResourceId {
    fn from(id: &String) -> Self {
        ResourceId::Text(id.clone())
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        ResourceId::Number(id)
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        ResourceId::Number(id.into())
    }
}

/// Parameters for starting a job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunJob {
    #[serde(rename = "repoID")]
    pub repo_id: ResourceId,
    pub branch: String,
    pub task: String,
    /// URL notified by the service. Left out of the request when blank.
    #[serde(skip_serializing_if = "is_blank")]
    pub webhook: Option<String>,
}

impl RunJob {
    pub fn new(
        repo_id: impl Into<ResourceId>,
        branch: impl Into<String>,
        task: impl Into<String>,
    ) -> Self {
        Self {
            repo_id: repo_id.into(),
            branch: branch.into(),
            task: task.into(),
            webhook: None,
        }
    }

    pub fn webhook(mut self, webhook: impl Into<String>) -> Self {
        self.webhook = Some(webhook.into());
        self
    }
}

fn is_blank(webhook: &Option<String>) -> bool {
    webhook.as_deref().map_or(true, str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_run_job_without_webhook_omits_field() {
        let job = RunJob::new("r1", "main", "build");
        assert_eq!(
            serde_json::to_value(&job).unwrap(),
            json!({"repoID": "r1", "branch": "main", "task": "build"})
        );
    }

    #[test]
    fn test_run_job_with_webhook_keeps_it_verbatim() {
        let job = RunJob::new("r1", "main", "build").webhook("https://hooks.example.com/a?b=c");
        assert_eq!(
            serde_json::to_value(&job).unwrap(),
            json!({
                "repoID": "r1",
                "branch": "main",
                "task": "build",
                "webhook": "https://hooks.example.com/a?b=c",
            })
        );
    }

    #[test]
    fn test_run_job_empty_webhook_is_omitted() {
        let job = RunJob::new("r1", "main", "build").webhook("");
        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("webhook").is_none());
    }

    #[test]
    fn test_resource_id_keeps_its_shape() {
        assert_eq!(serde_json::to_value(ResourceId::from("k-1")).unwrap(), json!("k-1"));
        assert_eq!(serde_json::to_value(ResourceId::from(42u64)).unwrap(), json!(42));
        assert_eq!(ResourceId::from(7u32).to_string(), "7");
    }
}
