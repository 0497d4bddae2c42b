//! Transport configuration.
//!
//! [`TransportConfig`] carries everything a transport needs to address a
//! HugeGraph server: the base URL, the graph name used in every schema path,
//! optional basic-auth credentials, and the request timeout.
//!
//! ## Environment
//!
//! [`TransportConfig::from_env`] reads:
//!
//! | Variable                 | Default                 |
//! |--------------------------|-------------------------|
//! | `HUGEGRAPH_URL`          | `http://127.0.0.1:8080` |
//! | `HUGEGRAPH_GRAPH`        | `hugegraph`             |
//! | `HUGEGRAPH_USERNAME`     | unset                   |
//! | `HUGEGRAPH_PASSWORD`     | unset                   |
//! | `HUGEGRAPH_TIMEOUT_SECS` | `30`                    |

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::endpoint::is_dot_segment;
use crate::error::ConfigError;

/// Default server address of a local HugeGraph install.
pub const DEFAULT_URL: &str = "http://127.0.0.1:8080";

/// Graph created by a stock HugeGraph server.
pub const DEFAULT_GRAPH: &str = "hugegraph";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_URL: &str = "HUGEGRAPH_URL";
pub const ENV_GRAPH: &str = "HUGEGRAPH_GRAPH";
pub const ENV_USERNAME: &str = "HUGEGRAPH_USERNAME";
pub const ENV_PASSWORD: &str = "HUGEGRAPH_PASSWORD";
pub const ENV_TIMEOUT_SECS: &str = "HUGEGRAPH_TIMEOUT_SECS";

/// Configuration shared by every request a transport performs.
#[derive(Clone)]
pub struct TransportConfig {
    base_url: Url,
    graph: String,
    username: Option<String>,
    password: Option<String>,
    timeout: Duration,
    user_agent: String,
    default_headers: HeaderMap,
}

impl TransportConfig {
    /// Creates a builder seeded with the defaults.
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::default()
    }

    /// Loads configuration from the `HUGEGRAPH_*` environment variables.
    ///
    /// ## Errors
    ///
    /// Returns an error if a variable holds an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// Missing keys fall back to defaults. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut builder = Self::builder();

        if let Some(url) = get(ENV_URL) {
            builder = builder.base_url(&url)?;
        }
        if let Some(graph) = get(ENV_GRAPH) {
            builder = builder.graph(graph);
        }
        if let Some(username) = get(ENV_USERNAME) {
            builder = builder.credentials(username, get(ENV_PASSWORD).unwrap_or_default());
        }
        if let Some(secs) = get(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ConfigError::invalid_value("timeout", format!("`{secs}` is not a number of seconds"))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Graph name substituted into `{graph}` path placeholders.
    pub fn graph(&self) -> &str {
        &self.graph
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Timeout applied to requests that do not set their own.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Headers added to every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Resolves an absolute request path against the base URL.
    ///
    /// Any path prefix on the base URL is kept, so a server mounted at
    /// `http://host/hg` receives `/hg/graphs/...`.
    ///
    /// ## Errors
    ///
    /// Returns an error if `path` is not absolute or the base URL cannot
    /// carry a path.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, ConfigError> {
        if !path.starts_with('/') {
            return Err(ConfigError::invalid_value(
                "path",
                format!("`{path}` must start with '/'"),
            ));
        }
        if self.base_url.cannot_be_a_base() {
            return Err(ConfigError::invalid_value(
                "base_url",
                format!("`{}` cannot carry a path", self.base_url),
            ));
        }

        let mut url = self.base_url.clone();
        let joined = format!("{}{path}", url.path().trim_end_matches('/'));
        url.set_path(&joined);
        url.set_query(None);
        Ok(url)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            // DEFAULT_URL is a valid absolute URL
            base_url: Url::parse(DEFAULT_URL).expect("default URL parses"),
            graph: DEFAULT_GRAPH.to_string(),
            username: None,
            password: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("hugegraph-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            default_headers: HeaderMap::new(),
        }
    }
}

// Manual Debug so the password never reaches a log line
impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("base_url", &self.base_url.as_str())
            .field("graph", &self.graph)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("default_headers", &self.default_headers.len())
            .finish()
    }
}

/// Builder for [`TransportConfig`].
#[derive(Debug, Default)]
pub struct TransportConfigBuilder {
    config: TransportConfig,
}

impl TransportConfigBuilder {
    /// Sets the server base URL.
    ///
    /// ## Errors
    ///
    /// Returns an error if `url` does not parse.
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.config.base_url = Url::parse(url)?;
        Ok(self)
    }

    /// Sets the graph name.
    pub fn graph(mut self, graph: impl Into<String>) -> Self {
        self.config.graph = graph.into();
        self
    }

    /// Sets HTTP basic-auth credentials.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.config.username = Some(username.into());
        self.config.password = Some(password.into());
        self
    }

    /// Sets the default request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Adds a header sent with every request.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ConfigError> {
        let name = HeaderName::try_from(name.as_ref()).map_err(|e| ConfigError::InvalidHeader {
            message: format!("invalid header name: {e}"),
        })?;
        let value = HeaderValue::try_from(value.as_ref()).map_err(|e| ConfigError::InvalidHeader {
            message: format!("invalid header value: {e}"),
        })?;
        self.config.default_headers.insert(name, value);
        Ok(self)
    }

    /// Validates and returns the configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the graph name is empty or a dot segment, the
    /// timeout is zero, or a username was given with an empty password.
    pub fn build(self) -> Result<TransportConfig, ConfigError> {
        let config = self.config;

        if config.graph.trim().is_empty() {
            return Err(ConfigError::invalid_value("graph", "must not be empty"));
        }
        if is_dot_segment(&config.graph) {
            return Err(ConfigError::invalid_value("graph", "must not be `.` or `..`"));
        }
        if config.timeout.is_zero() {
            return Err(ConfigError::invalid_value("timeout", "must be greater than zero"));
        }
        if config.username.is_some() && config.password.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::missing_field("password"));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TransportConfig::builder().build().unwrap();
        assert_eq!(config.base_url().as_str(), "http://127.0.0.1:8080/");
        assert_eq!(config.graph(), "hugegraph");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.username().is_none());
        assert!(config.user_agent().starts_with("hugegraph-rs/"));
    }

    #[test]
    fn test_from_lookup_reads_every_variable() {
        let config = TransportConfig::from_lookup(lookup(&[
            (ENV_URL, "http://graph.internal:18080"),
            (ENV_GRAPH, "social"),
            (ENV_USERNAME, "admin"),
            (ENV_PASSWORD, "s3cret"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();

        assert_eq!(config.base_url().as_str(), "http://graph.internal:18080/");
        assert_eq!(config.graph(), "social");
        assert_eq!(config.username(), Some("admin"));
        assert_eq!(config.password(), Some("s3cret"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_from_lookup_empty_values_use_defaults() {
        let config = TransportConfig::from_lookup(lookup(&[(ENV_GRAPH, "  ")])).unwrap();
        assert_eq!(config.graph(), DEFAULT_GRAPH);
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err = TransportConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "timeout", .. }));
    }

    #[test]
    fn test_from_lookup_bad_url() {
        let err = TransportConfig::from_lookup(lookup(&[(ENV_URL, "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_username_requires_password() {
        let err = TransportConfig::from_lookup(lookup(&[(ENV_USERNAME, "admin")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { field: "password" }));
    }

    #[test]
    fn test_dot_segment_graph_rejected() {
        for graph in [".", ".."] {
            let err = TransportConfig::builder().graph(graph).build().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { field: "graph", .. }));
        }
    }

    #[test]
    fn test_empty_graph_rejected() {
        let err = TransportConfig::builder().graph("").build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "graph", .. }));
    }

    #[test]
    fn test_invalid_default_header() {
        let err = TransportConfig::builder()
            .default_header("bad header", "x")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeader { .. }));
    }

    #[test]
    fn test_endpoint_url_keeps_base_prefix() {
        let config = TransportConfig::builder()
            .base_url("http://localhost:8080/hg/")
            .unwrap()
            .build()
            .unwrap();
        let url = config.endpoint_url("/graphs/hugegraph/schema/propertykeys").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/hg/graphs/hugegraph/schema/propertykeys"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_encoded_segments() {
        let config = TransportConfig::default();
        let url = config
            .endpoint_url("/graphs/hugegraph/schema/propertykeys/a%2Fb")
            .unwrap();
        assert_eq!(url.path(), "/graphs/hugegraph/schema/propertykeys/a%2Fb");
    }

    #[test]
    fn test_endpoint_url_rejects_relative_path() {
        let err = TransportConfig::default().endpoint_url("graphs").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "path", .. }));
    }

    #[test]
    fn test_endpoint_url_rejects_opaque_base() {
        let config = TransportConfig::builder()
            .base_url("mailto:admin@example.com")
            .unwrap()
            .build()
            .unwrap();
        let err = config.endpoint_url("/graphs").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "base_url", .. }));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = TransportConfig::builder()
            .credentials("admin", "s3cret")
            .build()
            .unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("s3cret"));
    }
}
