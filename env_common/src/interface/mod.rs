mod handlers;

pub use handlers::{
    ApplicationPlatform, AwsBeanstalkConnector, AwsBeanstalkHandler, AwsPipelineHandler,
    PipelineJobReporter, PlatformConnector,
};

#[cfg(test)]
pub use handlers::{MockApplicationPlatform, MockPipelineJobReporter};
