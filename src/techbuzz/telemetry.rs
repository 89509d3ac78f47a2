use std::io;

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::layer::SubscriberExt;

pub fn get_subscriber(
    debug: bool,
    max_log_files: usize,
) -> Result<(impl tracing::Subscriber + Send + Sync, WorkerGuard), io::Error> {
    let env_filter = if debug { "trace" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(env_filter));

    let json_log = if !debug {
        Some(tracing_subscriber::fmt::layer().json())
    } else {
        None
    };

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_suffix("techbuzz.log")
        .max_log_files(max_log_files)
        .build("./logs")
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking);

    let stdout_log = tracing_subscriber::fmt::layer().pretty();
    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(stdout_log)
        .with(json_log)
        .with(file_log);

    Ok((subscriber, guard))
}

pub fn init_subscriber(debug: bool, max_log_files: usize) -> Result<WorkerGuard, io::Error> {
    let (subscriber, guard) = get_subscriber(debug, max_log_files)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    Ok(guard)
}
