use thiserror::Error;
use url::Url;

/// Result type alias for fetch-errors operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Closed taxonomy of failures raised by the data-fetching layer.
///
/// Every failure is funneled into one of these variants at the boundary where
/// it occurs, so downstream classification is exhaustive matching rather than
/// runtime type probing. Shapes that match nothing land in [`FetchError::Other`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx HTTP response reported by the adapter. Status `0` means no
    /// response was received and does not count as an HTTP error.
    #[error("request failed with status {status}")]
    Adapter { status: u16 },

    /// Raised by the network manager when a request to `url` fails outright.
    /// Always classified as an HTTP error; `status` is `0` when unknown.
    #[error("failed to fetch {url}")]
    NetworkManager { url: Url, status: u16 },

    /// The data layer cancelled the request before it completed.
    #[error("request aborted")]
    Aborted,

    /// Platform-level exception, distinguished by its `name` field
    /// (`"AbortError"`, `"NetworkError"`, or anything else).
    #[error("{name}: {message}")]
    Platform { name: String, message: String },

    /// Low-level fetch failure whose only payload is its message text.
    #[error("{message}")]
    Fetch { message: String },

    /// Unrecognized error shape. Matches no classification predicate.
    #[error("{message}")]
    Other { message: String },
}

impl FetchError {
    /// Create a new adapter error for a non-2xx response status
    pub fn adapter(status: u16) -> Self {
        Self::Adapter { status }
    }

    /// Create a new network-manager error for a failed request with no
    /// status available
    pub fn network_manager(url: Url) -> Self {
        Self::NetworkManager { url, status: 0 }
    }

    /// Create a new network-manager error carrying the response status
    pub fn network_manager_with_status(url: Url, status: u16) -> Self {
        Self::NetworkManager { url, status }
    }

    /// Create a new platform exception
    pub fn platform<S: Into<String>>(name: S, message: S) -> Self {
        Self::Platform {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a new low-level fetch failure
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a new unrecognized error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    /// Map a transport error into the taxonomy at the point it is raised.
    ///
    /// Response statuses become [`FetchError::Adapter`]; connectivity
    /// failures (refused connections, timeouts) become a platform exception
    /// named `NetworkError`; everything else (builder, body, decode) is
    /// unrecognized and stays reportable.
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::Adapter {
                status: status.as_u16(),
            };
        }
        if err.is_connect() || err.is_timeout() {
            return Self::Platform {
                name: "NetworkError".to_string(),
                message: err.to_string(),
            };
        }
        Self::Other {
            message: err.to_string(),
        }
    }
}
