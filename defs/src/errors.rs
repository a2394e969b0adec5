use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Invalid invocation event, expected a CodePipeline job: {0}")]
    InvalidEvent(String),

    #[error("Error parsing json: {0}")]
    ConfigurationParse(String),

    #[error("Invalid versionRegex '{0}': {1}")]
    InvalidVersionPattern(String, String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("No version item found")]
    NoVersionFound,

    #[error("Version is already deployed: {0}")]
    VersionAlreadyDeployed(String),

    #[error("EnvironmentName {0} is not present in {1}")]
    EnvironmentNotFound(String, String),

    #[error("Application version {0} already deployed")]
    ApplicationVersionAlreadyDeployed(String),

    // Upstream errors keep their own message
    #[error("{0}")]
    Platform(anyhow::Error),

    #[error("{0}")]
    Report(anyhow::Error),
}
