//! Tracing Setup
//!
//! Initializes the `tracing` subscriber with an env-filter. The filter
//! honors `RUST_LOG` when set and falls back to the configured level.
//!
//! # Usage
//!
//! ```rust,ignore
//! use backoffice_engine::telemetry::init_telemetry;
//!
//! init_telemetry("info");
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize the tracing subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_telemetry(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true);

    // try_init so tests that each set up logging do not panic.
    let _ = Registry::default().with(env_filter).with(fmt_layer).try_init();
}
