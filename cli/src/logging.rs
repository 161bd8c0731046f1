//! Tracing initialisation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// clap value parser for `--log-level`: rejects directives `EnvFilter`
/// cannot parse.
pub fn parse_directives(raw: &str) -> Result<String, String> {
    EnvFilter::try_new(raw)
        .map(|_| raw.to_string())
        .map_err(|e| format!("invalid filter directive: {e}"))
}

/// Installs the global subscriber. `level` wins over `RUST_LOG`, which wins
/// over the `info` default.
pub fn init(level: Option<&str>, json: bool) {
    let filter = match level {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
