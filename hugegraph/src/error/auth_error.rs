//! Authentication and authorization errors.

use thiserror::Error;

/// Errors raised when the HugeGraph server rejects the caller.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Server rejected the credentials (HTTP 401).
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Response body returned by the server.
        message: String,
    },

    /// Credentials are valid but lack access to the resource (HTTP 403).
    #[error("Insufficient permissions: {operation}")]
    InsufficientPermissions {
        /// The request that was denied, as `METHOD path`.
        operation: String,
    },
}
