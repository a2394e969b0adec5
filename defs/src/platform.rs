use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ApplicationVersion {
    pub version_label: String,
    pub status: Option<String>,
}

impl ApplicationVersion {
    /// A version without a status is treated like a processed one.
    pub fn is_deployable(&self) -> bool {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => !status.eq_ignore_ascii_case("processed"),
            _ => false,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct EnvironmentResp {
    pub environment_name: String,
    pub version_label: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct UpdateEnvironmentResp {
    pub environment_name: Option<String>,
    pub version_label: Option<String>,
    pub status: Option<String>,
}
