use anyhow::anyhow;
use aws_sdk_codepipeline::error::DisplayErrorContext;
use aws_sdk_codepipeline::types::{FailureDetails, FailureType};
use env_defs::{FailureKind, JobFailure};
use log::info;

use crate::CodePipelineClient;

pub async fn put_job_success_result(
    client: &CodePipelineClient,
    job_id: &str,
) -> Result<(), anyhow::Error> {
    client
        .put_job_success_result()
        .job_id(job_id)
        .send()
        .await
        .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

    info!("Reported success for job {}", job_id);
    Ok(())
}

pub async fn put_job_failure_result(
    client: &CodePipelineClient,
    job_id: &str,
    failure: &JobFailure,
) -> Result<(), anyhow::Error> {
    let failure_type = match failure.kind {
        FailureKind::JobFailed => FailureType::JobFailed,
    };
    let failure_details = FailureDetails::builder()
        .r#type(failure_type)
        .message(truncate_message(&failure.message))
        .build()?;

    client
        .put_job_failure_result()
        .job_id(job_id)
        .failure_details(failure_details)
        .send()
        .await
        .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

    info!("Reported failure for job {}", job_id);
    Ok(())
}

// CodePipeline rejects failure messages longer than 5000 characters
const MAX_FAILURE_MESSAGE_LEN: usize = 5000;

fn truncate_message(message: &str) -> String {
    message.chars().take(MAX_FAILURE_MESSAGE_LEN).collect()
}
