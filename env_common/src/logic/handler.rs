use env_defs::{CodePipelineEvent, DeployError};
use env_utils::{inspect, redact_event};
use log::{error, info};
use serde_json::Value;

use crate::interface::{PipelineJobReporter, PlatformConnector};
use crate::logic::deploy_job;

/// Entry point for one raw invocation event.
///
/// Events that are not CodePipeline jobs carry no job id to report to, so
/// they are rejected without touching the pipeline.
pub async fn handle_event(
    event: Value,
    reporter: &dyn PipelineJobReporter,
    connector: &dyn PlatformConnector,
) -> Result<String, DeployError> {
    info!("EVENT {}", inspect(&redact_event(&event)));

    let job = match CodePipelineEvent::from_value(event) {
        Ok(event) => event.into_job(),
        Err(e) => {
            error!("ERROR {}", e);
            return Err(e);
        }
    };

    deploy_job(&job, reporter, connector).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::{ApplicationPlatform, MockApplicationPlatform, MockPipelineJobReporter};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    struct NoPlatform;

    #[async_trait]
    impl PlatformConnector for NoPlatform {
        async fn connect(&self, _region: &str) -> Arc<dyn ApplicationPlatform> {
            let mut platform = MockApplicationPlatform::new();
            platform.expect_list_application_versions().never();
            Arc::new(platform)
        }
    }

    #[tokio::test]
    async fn test_non_pipeline_event_is_not_reported() {
        let mut reporter = MockPipelineJobReporter::new();
        reporter.expect_put_job_success().never();
        reporter.expect_put_job_failure().never();

        let err = handle_event(json!({ "source": "aws.events" }), &reporter, &NoPlatform)
            .await
            .unwrap_err();
        assert!(matches!(err, DeployError::InvalidEvent(_)));
    }

    #[tokio::test]
    async fn test_missing_user_parameters_is_reported() {
        let mut reporter = MockPipelineJobReporter::new();
        reporter
            .expect_put_job_failure()
            .withf(|job_id, failure| {
                job_id == "job-1" && failure.message.starts_with("Error parsing json")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let event = json!({
            "CodePipeline.job": {
                "id": "job-1",
                "data": {
                    "actionConfiguration": { "configuration": { "FunctionName": "deployer" } }
                }
            }
        });
        let err = handle_event(event, &reporter, &NoPlatform).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error parsing json: EOF while parsing a value at line 1 column 0"
        );
    }

    #[tokio::test]
    async fn test_job_without_data_is_reported() {
        let mut reporter = MockPipelineJobReporter::new();
        reporter.expect_put_job_success().never();
        reporter
            .expect_put_job_failure()
            .withf(|job_id, failure| {
                job_id == "job-1" && failure.message.starts_with("Error parsing json")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let event = json!({ "CodePipeline.job": { "id": "job-1" } });
        let err = handle_event(event, &reporter, &NoPlatform).await.unwrap_err();
        assert!(matches!(err, DeployError::ConfigurationParse(_)));
    }
}
