//! HTTP methods used by the HugeGraph REST API.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods the HugeGraph server exposes.
///
/// ## Examples
///
/// ```rust
/// use hugegraph::RestMethod;
///
/// let method: RestMethod = "GET".parse().unwrap();
/// assert_eq!(method, RestMethod::Get);
/// assert!(method.is_safe());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// Read a schema element, vertex, or edge.
    Get,
    /// Create a schema element or submit a job.
    Post,
    /// Append to, eliminate from, or update a resource.
    Put,
    /// Remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if this method should not modify server state.
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get)
    }

    /// Returns `true` if requests with this method normally carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        match method {
            RestMethod::Get => reqwest::Method::GET,
            RestMethod::Post => reqwest::Method::POST,
            RestMethod::Put => reqwest::Method::PUT,
            RestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}
