use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the config file provides one.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";

fn env_filter_or(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::try_new(fallback).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
}

/// Initialize a compact, human-readable subscriber writing to stdout.
/// - Respects `RUST_LOG` if set
/// - Otherwise uses `fallback`, or [`DEFAULT_FILTER`] if `fallback` does not parse
pub fn init_logging_compact(fallback: &str) {
    let _ = fmt()
        .with_env_filter(env_filter_or(fallback))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize a JSON subscriber writing to stdout, one event per line.
pub fn init_logging_json(fallback: &str) {
    let _ = fmt()
        .with_env_filter(env_filter_or(fallback))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize logging in the requested format. Calling this more than once is harmless.
pub fn init_logging(json: bool, fallback: &str) {
    if json {
        init_logging_json(fallback);
    } else {
        init_logging_compact(fallback);
    }
}
