use serde::{Deserialize, Serialize};

use crate::DeployError;

/// Invocation payload CodePipeline sends to a custom action Lambda.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct CodePipelineEvent {
    #[serde(rename = "CodePipeline.job")]
    pub job: PipelineJob,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct PipelineJob {
    #[serde(default)]
    pub id: Option<String>,
    // Missing paths end up as an empty configuration, which is still reported on the job
    #[serde(default)]
    pub data: JobData,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobData {
    #[serde(default)]
    pub action_configuration: ActionConfiguration,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct ActionConfiguration {
    #[serde(default)]
    pub configuration: serde_json::Map<String, serde_json::Value>,
}

/// One pipeline job as seen by the deployer: an optional id to report to
/// and the raw `UserParameters` string.
#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pub id: Option<String>,
    pub configuration: String,
}

impl CodePipelineEvent {
    pub fn from_value(value: serde_json::Value) -> Result<Self, DeployError> {
        serde_json::from_value(value).map_err(|e| DeployError::InvalidEvent(e.to_string()))
    }

    /// A missing or non-string `UserParameters` is kept as an empty string so that
    /// it fails as a configuration parse error and still gets reported on the job.
    pub fn into_job(self) -> Job {
        let configuration = self
            .job
            .data
            .action_configuration
            .configuration
            .get("UserParameters")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        Job {
            id: self.job.id,
            configuration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_event_into_job() {
        let event = json!({
            "CodePipeline.job": {
                "id": "11111111-abcd-1111-abcd-111111abcdef",
                "accountId": "111111111111",
                "data": {
                    "actionConfiguration": {
                        "configuration": {
                            "FunctionName": "deployer",
                            "UserParameters": "{\"region\":\"eu-central-1\"}"
                        }
                    },
                    "inputArtifacts": []
                }
            }
        });
        let job = CodePipelineEvent::from_value(event).unwrap().into_job();
        assert_eq!(
            job,
            Job {
                id: Some("11111111-abcd-1111-abcd-111111abcdef".to_string()),
                configuration: "{\"region\":\"eu-central-1\"}".to_string(),
            }
        );
    }

    #[test]
    fn test_event_without_job_id() {
        let event = json!({
            "CodePipeline.job": {
                "id": null,
                "data": { "actionConfiguration": { "configuration": {} } }
            }
        });
        let job = CodePipelineEvent::from_value(event).unwrap().into_job();
        assert_eq!(job.id, None);
        assert_eq!(job.configuration, "");
    }

    #[test]
    fn test_event_without_job_data() {
        let event = json!({ "CodePipeline.job": { "id": "job-1" } });
        let job = CodePipelineEvent::from_value(event).unwrap().into_job();
        assert_eq!(
            job,
            Job {
                id: Some("job-1".to_string()),
                configuration: "".to_string(),
            }
        );

        let event = json!({ "CodePipeline.job": { "id": "job-1", "data": {} } });
        let job = CodePipelineEvent::from_value(event).unwrap().into_job();
        assert_eq!(job.configuration, "");
    }

    #[test]
    fn test_event_not_from_pipeline() {
        let result = CodePipelineEvent::from_value(json!({ "event": "ping" }));
        assert!(matches!(result, Err(DeployError::InvalidEvent(_))));
    }
}
