use anyhow::anyhow;
use aws_sdk_elasticbeanstalk::error::DisplayErrorContext;
use env_defs::{ApplicationVersion, EnvironmentResp, UpdateEnvironmentResp};
use log::debug;

use crate::BeanstalkClient;

/// Application versions in the order Elastic Beanstalk returns them.
pub async fn describe_application_versions(
    client: &BeanstalkClient,
    application_name: &str,
) -> Result<Vec<ApplicationVersion>, anyhow::Error> {
    let resp = client
        .describe_application_versions()
        .application_name(application_name)
        .send()
        .await
        .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

    let versions = resp
        .application_versions()
        .iter()
        .filter_map(|version| {
            let version_label = version.version_label()?.to_string();
            let status = version.status().map(|s| s.as_str().to_string());
            Some(ApplicationVersion {
                version_label,
                status,
            })
        })
        .collect::<Vec<_>>();

    debug!(
        "Found {} application versions for {}",
        versions.len(),
        application_name
    );
    Ok(versions)
}

pub async fn describe_environments(
    client: &BeanstalkClient,
    application_name: &str,
) -> Result<Vec<EnvironmentResp>, anyhow::Error> {
    let resp = client
        .describe_environments()
        .application_name(application_name)
        .include_deleted(false)
        .send()
        .await
        .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

    let environments = resp
        .environments()
        .iter()
        .filter_map(|environment| {
            Some(EnvironmentResp {
                environment_name: environment.environment_name()?.to_string(),
                version_label: environment.version_label().map(|v| v.to_string()),
            })
        })
        .collect();

    Ok(environments)
}

pub async fn update_environment(
    client: &BeanstalkClient,
    application_name: &str,
    environment_name: &str,
    version_label: &str,
) -> Result<UpdateEnvironmentResp, anyhow::Error> {
    let resp = client
        .update_environment()
        .application_name(application_name)
        .environment_name(environment_name)
        .version_label(version_label)
        .send()
        .await
        .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

    Ok(UpdateEnvironmentResp {
        environment_name: resp.environment_name().map(|v| v.to_string()),
        version_label: resp.version_label().map(|v| v.to_string()),
        status: resp.status().map(|s| s.as_str().to_string()),
    })
}
