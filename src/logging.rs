use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Build the log filter: `RUST_LOG` when set, otherwise `level`.
///
/// An unparsable `level` is an error rather than silently logging nothing.
fn log_filter(level: &str, env_override: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directives = env_override.unwrap_or(level);
    EnvFilter::try_new(directives).with_context(|| format!("invalid log filter '{}'", directives))
}

/// Install the global subscriber for the CLI.
///
/// Events go to stderr, tagged with the emitting thread's name
/// (`worker-<id>` for scan workers), so stdout carries only the prompt and
/// the report.
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    let env_override = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(level, env_override.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_thread_names(true)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
