use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// Stdout carries the rendered tables, so log lines go to stderr. The level
/// applies to this crate only; `RUST_LOG` overrides the whole filter.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("homeroi={level},homeroi_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!(filter = %default_filter, "logging initialized");
    Ok(())
}
