use crate::classifier::ErrorInfo;
use crate::error::FetchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mutually exclusive telemetry bucket for a classified error.
///
/// The classification predicates on [`ErrorInfo`] overlap (an aborted request
/// is not an HTTP error, but a 503 is both an HTTP error and a server error);
/// dashboards and log lines want exactly one label per error, which this
/// projection provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Abort,
    Network,
    HttpServer,
    HttpClient,
    Other,
}

impl ErrorCategory {
    /// Project the classification predicates into a single bucket.
    ///
    /// Precedence when several match: abort > network > server > client >
    /// other, most severe transport condition first.
    pub fn of(error: &FetchError) -> Self {
        let info = ErrorInfo::of(error);
        if info.is_abort_error() {
            Self::Abort
        } else if info.is_network_error() {
            Self::Network
        } else if info.is_http_server_error() {
            Self::HttpServer
        } else if info.is_http_client_error() {
            Self::HttpClient
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Abort => "abort",
            Self::Network => "network",
            Self::HttpServer => "http_server",
            Self::HttpClient => "http_client",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}

/// Summary of classification statistics across a batch of errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSummary {
    pub total: usize,
    pub reportable: usize, // should_send_to_sentry() == true
    pub aborts: usize,
    pub network: usize,
    pub http_server: usize,
    pub http_client: usize,
    pub other: usize,
}

impl ErrorSummary {
    /// Create a new empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate a summary from a batch of errors
    pub fn from_errors(errors: &[FetchError]) -> Self {
        let mut summary = Self::new();
        for error in errors {
            summary.record(error);
        }
        summary
    }

    /// Record a single error into the running totals
    pub fn record(&mut self, error: &FetchError) {
        self.total += 1;
        if ErrorInfo::of(error).should_send_to_sentry() {
            self.reportable += 1;
        }
        match ErrorCategory::of(error) {
            ErrorCategory::Abort => self.aborts += 1,
            ErrorCategory::Network => self.network += 1,
            ErrorCategory::HttpServer => self.http_server += 1,
            ErrorCategory::HttpClient => self.http_client += 1,
            ErrorCategory::Other => self.other += 1,
        }
    }
}
