mod json;
mod logging;

pub use json::{inspect, redact_event};
pub use logging::{log_level_from_env, setup_logging};
