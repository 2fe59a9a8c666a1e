use crate::config::Config;
use anyhow::Context;
use std::fs::OpenOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{
        Directive,
        EnvFilter,
    },
    layer::SubscriberExt,
};

/// Try to setup a logger.
///
/// Logs always go to the stderr.
/// If the config names a log file, they are also appended to it.
///
/// # Returns
/// Returns the guard of the file writer, if there is one.
/// It must be held until the program exits, or buffered logs will be lost.
pub fn setup(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let mut env_filter = EnvFilter::default();
    for directive in config.log().directives() {
        let directive = directive
            .parse::<Directive>()
            .with_context(|| format!("invalid log directive `{directive}`"))?;
        env_filter = env_filter.add_directive(directive);
    }

    let stderr_formatting_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_formatting_layer, worker_guard) = match config.log().file() {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{}'", path.display()))?;
            let (file_writer, worker_guard) = tracing_appender::non_blocking(file);
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
