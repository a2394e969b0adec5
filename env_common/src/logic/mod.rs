mod deploy;
mod handler;

pub use deploy::{
    deploy_job, parse_deployment_request, select_candidate_version, validate_target_environment,
};
pub use handler::handle_event;
