//! Shared test-logging setup.

use std::env;
use std::sync::Once;
use tracing::info;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Installs the global tracing subscriber for tests. Safe to call from every
/// test; only the first call does any work.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "debug");
        }
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(env_filter),
        );

        if subscriber.try_init().is_err() {
            // another harness thread won the race, keep its subscriber
            return;
        }
        info!("test setup complete");
    });
}
