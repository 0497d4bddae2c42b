//! The client entry point.

use std::fmt;
use std::sync::Arc;

use crate::api::property_key::PropertyKeyApi;
use crate::config::TransportConfig;
use crate::error::ApiError;
use crate::transport::{HttpTransport, Transport};

/// A HugeGraph client bound to one shared transport.
///
/// Clones share the transport, so one client can serve many tasks.
///
/// ## Examples
///
/// ```rust,ignore
/// use hugegraph::{HugeGraphClient, TransportConfig};
///
/// let client = HugeGraphClient::new(TransportConfig::from_env()?)?;
/// let keys = client.property_keys().list().send().await?;
/// for key in &keys.data().propertykeys {
///     println!("{}: {}", key.name, key.data_type);
/// }
/// ```
pub struct HugeGraphClient<T: Transport = HttpTransport> {
    transport: Arc<T>,
}

impl HugeGraphClient<HttpTransport> {
    /// Creates a client over an [`HttpTransport`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: TransportConfig) -> Result<Self, ApiError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Creates a client configured from `HUGEGRAPH_*` environment variables.
    ///
    /// ## Errors
    ///
    /// Returns an error if a variable is invalid or the HTTP client cannot
    /// be constructed.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(TransportConfig::from_env()?)
    }
}

impl<T: Transport> HugeGraphClient<T> {
    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(transport: T) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Creates a client over a transport that is already shared.
    pub fn from_shared(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &TransportConfig {
        self.transport.config()
    }

    /// Property key schema endpoints.
    pub fn property_keys(&self) -> PropertyKeyApi<'_, T> {
        PropertyKeyApi::new(&self.transport)
    }
}

// Manual Clone: only the Arc is cloned, T need not be Clone
impl<T: Transport> Clone for HugeGraphClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> fmt::Debug for HugeGraphClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HugeGraphClient")
            .field("config", self.config())
            .finish_non_exhaustive()
    }
}
