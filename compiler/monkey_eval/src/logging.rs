//! Tracing subscriber setup for hosts that embed the evaluator.
//!
//! The evaluator only emits `tracing` events; installing a subscriber is the
//! host's call. [`init_tracing`] is the stock choice: nothing is installed
//! unless `RUST_LOG` is set, e.g. `RUST_LOG=monkey_eval=trace`.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical subscriber filtered by `RUST_LOG`.
///
/// Safe to call repeatedly; a subscriber installed earlier by the host is
/// left in place.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        let layer = HierarchicalLayer::new(2)
            .with_targets(true)
            .with_bracketed_fields(true);
        // Err means the host already installed one.
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(layer)
            .try_init();
    });
}
