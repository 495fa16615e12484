//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use veramate_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Env var holding per-target log directives.
pub const LOG_ENV_VAR: &str = "VERAMATE_LOG";

const DEFAULT_FILTER: &str = "veramate=info";

/// Initialize the VeraMate tracing/logging system.
///
/// Reads `VERAMATE_LOG` for per-crate log levels, e.g.
/// `VERAMATE_LOG=veramate_knowledge=debug,veramate_fusion=warn`.
/// Falls back to `veramate=info` if unset or invalid.
///
/// Idempotent; only the first call installs a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter, false);
}

/// Initialize from the loaded `[observability]` section.
///
/// `VERAMATE_LOG` still wins when set; otherwise `log_level` is the filter.
/// `json` selects JSON log lines.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    let directive = filter_directive(std::env::var(LOG_ENV_VAR).ok(), config);
    init_tracing_with_filter(&directive, config.json);
}

fn filter_directive(env_value: Option<String>, config: &ObservabilityConfig) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.log_level.clone())
}

/// Initialize with an explicit filter directive (tests, embedding hosts).
pub fn init_tracing_with_filter(directive: &str, json: bool) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    install(filter, json);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // try_init: a host may already own the global subscriber.
        let result = if json {
            registry.with(fmt::layer().json().with_target(true)).try_init()
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
        };
        if result.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
