//! Top-level API error type.

use super::{AuthError, ClientError, ConfigError, RequestError, ValidationError};
use thiserror::Error;

/// Top-level error type for all HugeGraph client operations.
///
/// Every stage of a call short-circuits into one of these variants. Nothing
/// is retried or reclassified on the way out, so the variant tells you which
/// stage failed.
///
/// ## Examples
///
/// ```rust,ignore
/// use hugegraph::ApiError;
///
/// fn handle_error(err: ApiError) {
///     match err {
///         ApiError::Request(e) => eprintln!("Bad request value: {e}"),
///         ApiError::Client(e) => eprintln!("Transport error: {e}"),
///         ApiError::Validation(e) => eprintln!("Undecodable response: {e}"),
///         ApiError::Auth(e) => eprintln!("Auth failed: {e}"),
///         ApiError::Config(e) => eprintln!("Configuration error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request value was rejected before any network I/O.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Transport errors (network, timeout, non-success status, cancellation).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response decoding errors.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Authentication and authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Configuration and request-construction errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns `true` when the failure happened before anything was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_error() {
        let err: ApiError = RequestError::MissingParameter {
            endpoint: "get_by_name",
            parameter: "name",
        }
        .into();
        assert!(matches!(err, ApiError::Request(_)));
        assert!(err.is_local());
    }

    #[test]
    fn test_from_client_error() {
        let api_err: ApiError = ClientError::Timeout { duration_ms: 5000 }.into();
        assert!(matches!(api_err, ApiError::Client(_)));
        assert!(!api_err.is_local());
    }

    #[test]
    fn test_display_is_transparent() {
        let err = ApiError::Client(ClientError::Connection("connection refused".to_string()));
        assert_eq!(err.to_string(), "Connection failed: connection refused");
    }
}
