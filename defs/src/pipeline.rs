use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub enum FailureKind {
    JobFailed,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct JobFailure {
    #[serde(rename = "type")]
    pub kind: FailureKind,
    pub message: String,
}

impl JobFailure {
    pub fn job_failed(message: impl Into<String>) -> Self {
        JobFailure {
            kind: FailureKind::JobFailed,
            message: message.into(),
        }
    }
}
