//! Typed async client for the HugeGraph REST API.
//!
//! Each endpoint is a request value with chained setters. Sending it builds
//! one HTTP request, performs it through a shared [`Transport`], and decodes
//! the JSON body into a typed payload wrapped in a [`Response`] envelope.
//!
//! ## Features
//!
//! - **Builder-style bindings**: required parameters are checked before any I/O
//! - **Pluggable transport**: [`HttpTransport`] over `reqwest`, or your own
//! - **Layered error handling**: structured errors for each stage of a call
//! - **Cancellation**: per-request timeouts and `CancellationToken` support
//! - **Tracing**: OpenTelemetry-style spans around every request
//!
//! ## Example
//!
//! ```rust,ignore
//! use hugegraph::{HugeGraphClient, TransportConfig};
//!
//! let config = TransportConfig::builder()
//!     .base_url("http://localhost:8080")?
//!     .graph("hugegraph")
//!     .build()?;
//! let client = HugeGraphClient::new(config)?;
//!
//! let age = client.property_keys().get_by_name().name("age").send().await?;
//! assert_eq!(age.status_code(), 200);
//! assert_eq!(age.data().cardinality, "SINGLE");
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod response;
pub mod transport;

// Re-exports for convenience
pub use api::property_key::{PropertyKey, PropertyKeyCollection, PropertyKeyUserData};
pub use client::HugeGraphClient;
pub use config::{TransportConfig, TransportConfigBuilder};
pub use endpoint::Endpoint;
pub use error::{ApiError, AuthError, ClientError, ConfigError, RequestError, ValidationError};
pub use method::RestMethod;
pub use response::{RawResponse, Response};
pub use transport::{HttpTransport, Transport};
