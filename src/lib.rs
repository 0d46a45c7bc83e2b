//! Fetch Errors - Semantic classification of client-side HTTP and network errors
//!
//! This crate funnels the failures a data-fetching layer can raise into a
//! closed taxonomy ([`FetchError`]) and derives the flags an application
//! needs to route each one: HTTP status class, abort, network failure, and
//! whether the error belongs in the error-reporting pipeline.

// Core modules
pub mod classifier;
pub mod error;
pub mod messages;

// Telemetry aggregation
pub mod summary;

// Re-export main types for convenience
pub use classifier::ErrorInfo;
pub use error::{FetchError, Result};
pub use messages::NETWORK_ERROR_MESSAGES;
pub use summary::{ErrorCategory, ErrorSummary};
