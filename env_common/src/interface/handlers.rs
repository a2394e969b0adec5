use std::sync::Arc;

use async_trait::async_trait;
use env_aws::{BeanstalkClient, CodePipelineClient};
use env_defs::{ApplicationVersion, EnvironmentResp, JobFailure, UpdateEnvironmentResp};

#[cfg(test)]
use mockall::automock;

/// Receives the single success or failure report of a pipeline job.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PipelineJobReporter: Send + Sync {
    async fn put_job_success(&self, job_id: &str) -> Result<(), anyhow::Error>;
    async fn put_job_failure(&self, job_id: &str, failure: &JobFailure)
        -> Result<(), anyhow::Error>;
}

/// The hosting platform the application versions are deployed on.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApplicationPlatform: Send + Sync {
    async fn list_application_versions(
        &self,
        application_name: &str,
    ) -> Result<Vec<ApplicationVersion>, anyhow::Error>;
    async fn list_environments(
        &self,
        application_name: &str,
    ) -> Result<Vec<EnvironmentResp>, anyhow::Error>;
    async fn update_environment(
        &self,
        application_name: &str,
        environment_name: &str,
        version_label: &str,
    ) -> Result<UpdateEnvironmentResp, anyhow::Error>;
}

/// The platform region is only known once the job configuration is parsed.
#[async_trait]
pub trait PlatformConnector: Send + Sync {
    async fn connect(&self, region: &str) -> Arc<dyn ApplicationPlatform>;
}

pub struct AwsPipelineHandler {
    client: CodePipelineClient,
}

impl AwsPipelineHandler {
    pub async fn new(region: &str) -> Self {
        AwsPipelineHandler {
            client: env_aws::get_codepipeline_client(region).await,
        }
    }
}

#[async_trait]
impl PipelineJobReporter for AwsPipelineHandler {
    async fn put_job_success(&self, job_id: &str) -> Result<(), anyhow::Error> {
        env_aws::put_job_success_result(&self.client, job_id).await
    }
    async fn put_job_failure(
        &self,
        job_id: &str,
        failure: &JobFailure,
    ) -> Result<(), anyhow::Error> {
        env_aws::put_job_failure_result(&self.client, job_id, failure).await
    }
}

pub struct AwsBeanstalkHandler {
    client: BeanstalkClient,
}

#[async_trait]
impl ApplicationPlatform for AwsBeanstalkHandler {
    async fn list_application_versions(
        &self,
        application_name: &str,
    ) -> Result<Vec<ApplicationVersion>, anyhow::Error> {
        env_aws::describe_application_versions(&self.client, application_name).await
    }
    async fn list_environments(
        &self,
        application_name: &str,
    ) -> Result<Vec<EnvironmentResp>, anyhow::Error> {
        env_aws::describe_environments(&self.client, application_name).await
    }
    async fn update_environment(
        &self,
        application_name: &str,
        environment_name: &str,
        version_label: &str,
    ) -> Result<UpdateEnvironmentResp, anyhow::Error> {
        env_aws::update_environment(
            &self.client,
            application_name,
            environment_name,
            version_label,
        )
        .await
    }
}

pub struct AwsBeanstalkConnector;

#[async_trait]
impl PlatformConnector for AwsBeanstalkConnector {
    async fn connect(&self, region: &str) -> Arc<dyn ApplicationPlatform> {
        Arc::new(AwsBeanstalkHandler {
            client: env_aws::get_beanstalk_client(region).await,
        })
    }
}
