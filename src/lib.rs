//! IPTV/VOD subscriber catalog.
//!
//! Domain model for a polymorphic stream catalog (live channels, relays,
//! encodes, timeshift, catch-up, VOD, events) and the aggregation engine
//! that resolves a subscriber's full entitlement view from its subscription
//! servers and privately owned streams.

pub mod config;
pub mod errors;
pub mod forms;
pub mod models;
pub mod services;

use tracing_subscriber::EnvFilter;

/// Install the default tracing subscriber for binaries and test harnesses.
///
/// Honors `RUST_LOG`; repeated calls are no-ops.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
