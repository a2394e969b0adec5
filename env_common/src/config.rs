use env_defs::DeployError;

/// Process level settings, read once at cold start.
#[derive(Clone, Debug, PartialEq)]
pub struct DeployerConfig {
    /// Region of the CodePipeline service the job reports go to.
    pub pipeline_region: String,
}

impl DeployerConfig {
    pub fn from_env() -> Result<Self, DeployError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, DeployError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pipeline_region = lookup("AWS_REGION")
            .or_else(|| lookup("AWS_DEFAULT_REGION"))
            .filter(|region| !region.is_empty())
            .ok_or_else(|| DeployError::MissingConfiguration("AWS_REGION".to_string()))?;
        Ok(DeployerConfig { pipeline_region })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_pipeline_region() {
        let config = DeployerConfig::from_lookup(lookup(&[
            ("AWS_REGION", "eu-west-1"),
            ("AWS_DEFAULT_REGION", "us-east-1"),
        ]))
        .unwrap();
        assert_eq!(config.pipeline_region, "eu-west-1");

        let config =
            DeployerConfig::from_lookup(lookup(&[("AWS_DEFAULT_REGION", "us-east-1")])).unwrap();
        assert_eq!(config.pipeline_region, "us-east-1");
    }

    #[test]
    fn test_missing_region() {
        let err = DeployerConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.to_string(), "Missing configuration: AWS_REGION");
    }
}
