use env_defs::{
    ApplicationVersion, DeployError, DeploymentRequest, EnvironmentResp, Job, JobFailure,
};
use env_utils::inspect;
use log::{error, info};
use regex::Regex;
use serde_json::json;

use crate::interface::{ApplicationPlatform, PipelineJobReporter, PlatformConnector};

/// Runs one pipeline job to completion and returns its single outcome.
///
/// Every error is reported to the pipeline as a job failure when the job
/// carries an id; a successful deployment is reported as a job success.
pub async fn deploy_job(
    job: &Job,
    reporter: &dyn PipelineJobReporter,
    connector: &dyn PlatformConnector,
) -> Result<String, DeployError> {
    let (request, version_pattern) = match parse_deployment_request(&job.configuration) {
        Ok(parsed) => parsed,
        Err(e) => return report_failure(job, reporter, e).await,
    };

    info!("PARAMS {}", inspect(&request));

    let platform = connector.connect(&request.region).await;
    let outcome = match start_deployment(platform.as_ref(), &request, &version_pattern).await {
        Ok(version_label) => report_success(job, reporter, &version_label).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(message) => Ok(message),
        Err(e) => report_failure(job, reporter, e).await,
    }
}

pub fn parse_deployment_request(
    configuration: &str,
) -> Result<(DeploymentRequest, Regex), DeployError> {
    let request = DeploymentRequest::from_json(configuration)?;
    let version_pattern = Regex::new(&request.version_regex).map_err(|e| {
        DeployError::InvalidVersionPattern(request.version_regex.clone(), e.to_string())
    })?;
    Ok((request, version_pattern))
}

/// Picks the first version, in platform order, whose label matches the pattern.
pub fn select_candidate_version<'a>(
    versions: &'a [ApplicationVersion],
    version_pattern: &Regex,
) -> Result<&'a ApplicationVersion, DeployError> {
    match versions
        .iter()
        .find(|version| version_pattern.is_match(&version.version_label))
    {
        Some(version) if !version.is_deployable() => Err(DeployError::VersionAlreadyDeployed(
            version.version_label.clone(),
        )),
        Some(version) => Ok(version),
        None => Err(DeployError::NoVersionFound),
    }
}

pub fn validate_target_environment(
    environments: &[EnvironmentResp],
    request: &DeploymentRequest,
    candidate: &ApplicationVersion,
) -> Result<(), DeployError> {
    let environment = environments
        .iter()
        .find(|env| env.environment_name == request.environment_name)
        .ok_or_else(|| {
            DeployError::EnvironmentNotFound(
                request.environment_name.clone(),
                request.application_name.clone(),
            )
        })?;

    if environment.version_label.as_deref() == Some(candidate.version_label.as_str()) {
        return Err(DeployError::ApplicationVersionAlreadyDeployed(
            candidate.version_label.clone(),
        ));
    }
    Ok(())
}

/// Returns the version label the environment update was started with.
async fn start_deployment(
    platform: &dyn ApplicationPlatform,
    request: &DeploymentRequest,
    version_pattern: &Regex,
) -> Result<String, DeployError> {
    let versions = platform
        .list_application_versions(&request.application_name)
        .await
        .map_err(DeployError::Platform)?;
    info!("VERSIONS {}", inspect(&versions));

    let candidate = select_candidate_version(&versions, version_pattern)?;
    info!("VERSION {}", inspect(candidate));

    let environments = platform
        .list_environments(&request.application_name)
        .await
        .map_err(DeployError::Platform)?;
    info!("ENVIRONMENTS {}", inspect(&environments));

    validate_target_environment(&environments, request, candidate)?;

    info!(
        "UPDATE-ENV {}",
        inspect(&json!({
            "ApplicationName": request.application_name,
            "EnvironmentName": request.environment_name,
            "VersionLabel": candidate.version_label,
        }))
    );
    let result = platform
        .update_environment(
            &request.application_name,
            &request.environment_name,
            &candidate.version_label,
        )
        .await
        .map_err(DeployError::Platform)?;
    info!("DEPLOYING {}", inspect(&result));

    Ok(result
        .version_label
        .unwrap_or_else(|| candidate.version_label.clone()))
}

async fn report_success(
    job: &Job,
    reporter: &dyn PipelineJobReporter,
    version_label: &str,
) -> Result<String, DeployError> {
    match &job.id {
        Some(job_id) => {
            info!("NOTIFY-PIPELINE {}", inspect(&json!({ "jobId": job_id })));
            reporter
                .put_job_success(job_id)
                .await
                .map_err(DeployError::Report)?;
            info!("NOTIFY-PIPELINE-RESULT reported success for job {}", job_id);
            Ok(format!(
                "Started deployment of {} and reported job success",
                version_label
            ))
        }
        None => Ok(format!("Started deployment of {}", version_label)),
    }
}

/// Reports the error on the job (if any) and hands the original error back.
async fn report_failure(
    job: &Job,
    reporter: &dyn PipelineJobReporter,
    err: DeployError,
) -> Result<String, DeployError> {
    error!("ERROR {}", err);
    let Some(job_id) = &job.id else {
        return Err(err);
    };

    let failure = JobFailure::job_failed(err.to_string());
    info!(
        "NOTIFY-PIPELINE-ERROR {}",
        inspect(&json!({ "jobId": job_id, "failureDetails": failure }))
    );
    match reporter.put_job_failure(job_id, &failure).await {
        Ok(()) => info!("NOTIFY-PIPELINE-ERROR-RESULT reported failure for job {}", job_id),
        Err(report_err) => error!(
            "NOTIFY-PIPELINE-ERROR-RESULT failed to report failure for job {}: {}",
            job_id, report_err
        ),
    }
    Err(err)
}
