use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_common::{handle_event, AwsBeanstalkConnector, AwsPipelineHandler, DeployerConfig};
use env_utils::{log_level_from_env, setup_logging};
use serde_json::Value;

/// Run one CodePipeline deploy job from a saved invocation event.
#[derive(Parser, Debug)]
#[command(name = "deployer-local", version)]
struct Args {
    /// Path to a JSON file holding the `CodePipeline.job` event
    #[arg(long)]
    event: PathBuf,

    /// Region of the pipeline, defaults to AWS_REGION
    #[arg(long)]
    pipeline_region: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(log_level_from_env())?;

    let config = match args.pipeline_region {
        Some(pipeline_region) => DeployerConfig { pipeline_region },
        None => DeployerConfig::from_env()?,
    };

    let raw = std::fs::read_to_string(&args.event)
        .with_context(|| format!("Failed to read event file {}", args.event.display()))?;
    let event: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Event file {} is not valid JSON", args.event.display()))?;

    let reporter = AwsPipelineHandler::new(&config.pipeline_region).await;
    let message = handle_event(event, &reporter, &AwsBeanstalkConnector).await?;
    println!("{}", message);

    Ok(())
}
