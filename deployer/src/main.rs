use env_common::{handle_event, AwsBeanstalkConnector, AwsPipelineHandler, DeployerConfig};
use env_utils::{log_level_from_env, setup_logging};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::info;
use serde_json::{json, Value};

async fn func(event: LambdaEvent<Value>, reporter: &AwsPipelineHandler) -> Result<Value, Error> {
    let (event, context) = event.into_parts();
    info!(
        "CONTEXT request_id={} function={}",
        context.request_id, context.invoked_function_arn
    );

    match handle_event(event, reporter, &AwsBeanstalkConnector).await {
        Ok(message) => {
            info!("{}", message);
            Ok(json!({ "message": message }))
        }
        Err(e) => Err(Error::from(e.to_string())),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_logging(log_level_from_env())?;

    let config = DeployerConfig::from_env()?;
    info!("PIPELINE-REGION {}", config.pipeline_region);

    // One CodePipeline client per execution environment, shared by all invocations
    let reporter = AwsPipelineHandler::new(&config.pipeline_region).await;
    let reporter = &reporter;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        func(event, reporter).await
    }))
    .await
}
