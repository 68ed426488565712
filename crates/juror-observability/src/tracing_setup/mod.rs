//! Tracing setup: structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use juror_core::config::ObservabilityConfig;
use juror_core::constants::LOG_TARGET_PREFIX;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target log filters.
///
/// Format: `JUROR_LOG=juror_em=debug,juror_batch=info`
pub const LOG_ENV: &str = "JUROR_LOG";

/// Initialize human-readable tracing output.
///
/// Reads [`LOG_ENV`], falling back to `juror=info` if it is unset or invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init(default_filter("info"), false);
}

/// Initialize tracing with JSON lines output.
pub fn init_tracing_json() {
    init(default_filter("info"), true);
}

/// Initialize tracing from the `[observability]` config section.
///
/// [`LOG_ENV`] still takes precedence over `log_level`.
pub fn init_from_config(config: &ObservabilityConfig) {
    init(default_filter(&config.log_level), config.json_logs);
}

fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("{LOG_TARGET_PREFIX}={level}")))
}

fn init(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // Another subscriber (e.g. a test harness) may already be installed.
        if json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
                .ok();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
                .ok();
        }
    });
}
