//! Shared test utilities for fetch-errors tests
//!
//! Factory helpers for building the error shapes the classification tests
//! exercise repeatedly.

use fetch_errors::FetchError;
use url::Url;

/// Helper to create an adapter error with a specific status
pub fn adapter_error(status: u16) -> FetchError {
    FetchError::adapter(status)
}

/// Helper to create a network-manager error for a path on a test host
pub fn network_manager_error(path: &str) -> FetchError {
    let url: Url = format!("https://api.example.com{}", path).parse().unwrap();
    FetchError::network_manager(url)
}

/// Helper to create a platform exception with the given name
pub fn platform_error(name: &str) -> FetchError {
    FetchError::platform(name, "platform exception raised in test")
}

/// Helper to create a low-level fetch failure with the given message
pub fn fetch_error(message: &str) -> FetchError {
    FetchError::fetch(message)
}
