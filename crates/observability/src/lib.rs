//! Tracing/logging setup shared by every storefront binary.

/// Subscriber configuration (filters, output format).
pub mod logging;

pub use logging::{LogFormat, init};
