use crate::config::Config;
use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{
        Directive,
        EnvFilter,
    },
    layer::SubscriberExt,
};

/// The name of the log file, inside the configured log dir
const LOG_FILE_NAME: &str = "oxo.log";

/// Try to setup a logger.
///
/// Logs go to the stderr, and to a file if the config has a log dir.
/// The returned guard flushes the file when dropped, so keep it alive until shutdown.
pub fn setup(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let default_directive: Directive = config
        .log()
        .level()
        .parse()
        .context("invalid log level")?;
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_directive)
        .from_env_lossy();

    let stderr_formatting_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_formatting_layer, worker_guard) = match config.log().dir() {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log dir `{}`", dir))?;
            let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (file_writer, worker_guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file_writer);

            (Some(layer), Some(worker_guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(file_formatting_layer)
        .with(stderr_formatting_layer);

    tracing::subscriber::set_global_default(subscriber).context("failed to set subscriber")?;

    Ok(worker_guard)
}
