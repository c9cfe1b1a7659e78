use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

/// Install the global subscriber with a rolling daily log file.
///
/// The returned guard must stay alive for the lifetime of the embedding
/// shell; dropping it flushes and stops the background writer.
pub fn init(log_dir: &str) -> WorkerGuard {
    let file_appender = rolling::daily(log_dir, "hrdesk.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    guard
}
