use serde::{Deserialize, Serialize};

use crate::DeployError;

/// Parsed `UserParameters` of the pipeline action, for example:
///
/// ```json
/// {
///   "region": "eu-central-1",
///   "applicationName": "Demo",
///   "environmentName": "demo-prod",
///   "versionRegex": "demo_prod"
/// }
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRequest {
    pub region: String,
    pub application_name: String,
    pub environment_name: String,
    pub version_regex: String,
}

impl DeploymentRequest {
    pub fn from_json(configuration: &str) -> Result<Self, DeployError> {
        serde_json::from_str(configuration)
            .map_err(|e| DeployError::ConfigurationParse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_json() {
        let request = DeploymentRequest::from_json(
            r#"{"region":"eu-central-1","applicationName":"Demo","environmentName":"demo-prod","versionRegex":"demo_prod"}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            DeploymentRequest {
                region: "eu-central-1".to_string(),
                application_name: "Demo".to_string(),
                environment_name: "demo-prod".to_string(),
                version_regex: "demo_prod".to_string(),
            }
        );
    }

    #[test]
    fn test_from_json_malformed() {
        let err = DeploymentRequest::from_json("{region: eu-central-1").unwrap_err();
        assert!(matches!(err, DeployError::ConfigurationParse(_)));
        assert!(err.to_string().starts_with("Error parsing json"));
    }

    #[test]
    fn test_from_json_missing_field() {
        let err = DeploymentRequest::from_json(
            r#"{"region":"eu-central-1","applicationName":"Demo","environmentName":"demo-prod"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("versionRegex"));
    }
}
