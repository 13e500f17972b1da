//! Observability for the simulation pipeline
//!
//! Structured logging built on the tracing crate. Metrics and health
//! endpoints are the embedding application's concern, not this crate's.

pub mod logging;

pub use logging::{init_default_logging, init_logging, LogFormat};
