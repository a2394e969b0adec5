mod deployment;
mod errors;
mod job;
mod pipeline;
mod platform;

pub use deployment::DeploymentRequest;
pub use errors::DeployError;
pub use job::{ActionConfiguration, CodePipelineEvent, Job, JobData, PipelineJob};
pub use pipeline::{FailureKind, JobFailure};
pub use platform::{ApplicationVersion, EnvironmentResp, UpdateEnvironmentResp};
