#[cfg(feature = "trace")]
use std::path::Path;

/// Keeps the background trace writer alive; drop it to flush.
#[cfg(feature = "trace")]
pub type TraceGuard = Option<tracing_appender::non_blocking::WorkerGuard>;
#[cfg(not(feature = "trace"))]
pub type TraceGuard = ();

/// Write JSON trace events to `docso-trace.jsonl` in `log_dir`.
///
/// The filter comes from `RUST_LOG`, defaulting to `docso_core=debug`.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> TraceGuard {
    let file_appender = tracing_appender::rolling::never(log_dir, "docso-trace.jsonl");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docso_core=debug")),
        )
        .try_init()
        .ok()
        .map(|_| guard)
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) -> TraceGuard {}
