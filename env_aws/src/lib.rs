mod api_application;
mod api_job;
mod client;

pub use api_application::{
    describe_application_versions, describe_environments, update_environment,
};
pub use api_job::{put_job_failure_result, put_job_success_result};
pub use client::{
    get_beanstalk_client, get_codepipeline_client, BeanstalkClient, CodePipelineClient,
};
