pub mod config;
pub mod interface;
pub mod logic;

pub use config::DeployerConfig;
pub use interface::{
    ApplicationPlatform, AwsBeanstalkConnector, AwsBeanstalkHandler, AwsPipelineHandler,
    PipelineJobReporter, PlatformConnector,
};
pub use logic::{deploy_job, handle_event};
