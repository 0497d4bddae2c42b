//! Layered error types for the HugeGraph client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for all client operations
//! - [`RequestError`] - Request values rejected before any I/O
//! - [`ClientError`] - Transport and network errors
//! - [`ValidationError`] - Response decoding errors
//! - [`AuthError`] - Authentication and authorization errors
//! - [`ConfigError`] - Transport configuration errors

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod request_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use request_error::RequestError;
pub use validation_error::ValidationError;
