//! Tracing subscriber setup.
//!
//! Logs always go to stderr; stdout carries the JSON summaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `verbose` when set.
pub fn init(verbose: bool, json_format: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Install the subscriber from the `[logging]` section, letting CLI flags
/// switch on debug output or JSON logs.
pub fn init_from_config(config: &drape_core::Config, verbose: bool, json_logs: bool) {
    let level = config.logging.level.to_ascii_lowercase();
    let verbose = verbose || matches!(level.as_str(), "debug" | "trace");
    let json_format = json_logs || config.logging.format.eq_ignore_ascii_case("json");
    init(verbose, json_format);
}
