use crate::error::FetchError;
use crate::messages::NETWORK_ERROR_MESSAGES;

/// Read-only classification facade over a single [`FetchError`].
///
/// Constructed per-error at the call site and discarded after use. Every
/// property is a pure function of the wrapped value: repeated reads yield
/// identical results and nothing here allocates, blocks, or panics.
#[derive(Debug, Clone, Copy)]
pub struct ErrorInfo<'a> {
    error: &'a FetchError,
}

impl<'a> ErrorInfo<'a> {
    /// Wrap an error for classification
    pub fn of(error: &'a FetchError) -> Self {
        Self { error }
    }

    /// Returns the HTTP status code, or `None` if this is not an HTTP error
    /// or the status is unknown.
    pub fn http_status(&self) -> Option<u16> {
        match self.error {
            FetchError::NetworkManager { status, .. } | FetchError::Adapter { status }
                if *status > 0 =>
            {
                Some(*status)
            }
            _ => None,
        }
    }

    /// `true` when an HTTP request responded with a non-2xx status code.
    ///
    /// Adapter status `0` means no response was received (aborted before a
    /// response, CORS wall) and is not an HTTP error. Network-manager errors
    /// always count, even when their status is unknown.
    pub fn is_http_error(&self) -> bool {
        match self.error {
            FetchError::NetworkManager { .. } => true,
            FetchError::Adapter { status } => *status > 0,
            _ => false,
        }
    }

    /// `true` when an HTTP request responded with a 4xx status code.
    pub fn is_http_client_error(&self) -> bool {
        matches!(self.http_status(), Some(status) if (400..500).contains(&status))
    }

    /// `true` when an HTTP request responded with a 5xx status code.
    pub fn is_http_server_error(&self) -> bool {
        matches!(self.http_status(), Some(status) if (500..600).contains(&status))
    }

    /// `true` when the request was cancelled, either by the platform or by
    /// the data layer itself.
    pub fn is_abort_error(&self) -> bool {
        match self.error {
            FetchError::Aborted => true,
            FetchError::Platform { name, .. } => name == "AbortError",
            _ => false,
        }
    }

    /// `true` when the request failed due to connectivity rather than a
    /// response: a platform exception named `NetworkError`, or a low-level
    /// fetch failure with a recognized browser message.
    pub fn is_network_error(&self) -> bool {
        match self.error {
            FetchError::Fetch { message } => NETWORK_ERROR_MESSAGES.contains(message.as_str()),
            FetchError::Platform { name, .. } => name == "NetworkError",
            _ => false,
        }
    }

    /// `true` when the error should be forwarded to the error-reporting
    /// pipeline. Server errors, aborts, network failures and 401s are
    /// expected noise and stay out; everything else is reported.
    pub fn should_send_to_sentry(&self) -> bool {
        !self.is_http_server_error()
            && !self.is_abort_error()
            && !self.is_network_error()
            && self.http_status() != Some(401)
    }
}

impl FetchError {
    /// Classification view of this error
    pub fn info(&self) -> ErrorInfo<'_> {
        ErrorInfo::of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_status_zero_is_not_http() {
        let error = FetchError::adapter(0);
        let info = error.info();
        assert!(!info.is_http_error());
        assert_eq!(info.http_status(), None);
        assert!(info.should_send_to_sentry());
    }

    #[test]
    fn test_network_manager_is_http_without_status() {
        let error = FetchError::network_manager("https://api.example.com/v1/users".parse().unwrap());
        let info = error.info();
        assert!(info.is_http_error());
        assert_eq!(info.http_status(), None);
        assert!(!info.is_http_client_error());
        assert!(!info.is_http_server_error());
    }

    #[test]
    fn test_unknown_platform_name_matches_nothing() {
        let error = FetchError::platform("QuotaExceededError", "quota exceeded");
        let info = error.info();
        assert!(!info.is_abort_error());
        assert!(!info.is_network_error());
        assert!(info.should_send_to_sentry());
    }
}
