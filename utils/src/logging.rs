use std::env;

use chrono::Local;
use log::LevelFilter;

pub fn log_level_from_env() -> LevelFilter {
    match env::var("LOG_LEVEL").as_deref() {
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Info, // Lambda logs go to CloudWatch, keep the step trail by default
    }
}

pub fn setup_logging(level: LevelFilter) -> Result<(), fern::InitError> {
    let stderr_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        // SDK and runtime internals are noisy at debug
        .level_for("aws_smithy_runtime", LevelFilter::Warn)
        .level_for("aws_config", LevelFilter::Warn)
        .level_for("hyper", LevelFilter::Warn)
        .level_for("lambda_runtime", LevelFilter::Warn)
        .chain(std::io::stderr());

    fern::Dispatch::new().chain(stderr_config).apply()?;

    Ok(())
}
