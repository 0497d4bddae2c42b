//! The transport seam.
//!
//! Bindings never talk to the network directly. They build a
//! `reqwest::Request` with [`new_request`] and hand it to a [`Transport`],
//! which performs it and returns the raw response. [`HttpTransport`] is the
//! production implementation; tests substitute their own.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use hugegraph::transport::{HttpTransport, Transport};
//! use hugegraph::TransportConfig;
//!
//! let transport = HttpTransport::new(TransportConfig::from_env()?)?;
//! let request = hugegraph::transport::new_request(
//!     transport.config(),
//!     hugegraph::RestMethod::Get,
//!     "/graphs/hugegraph/schema/propertykeys",
//!     Default::default(),
//!     None,
//! )?;
//! let response = transport.perform(request).await?;
//! ```

mod http;

pub use http::HttpTransport;

use std::future::Future;

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::config::TransportConfig;
use crate::error::ApiError;
use crate::method::RestMethod;

/// Performs fully constructed HTTP requests.
///
/// Implementations are shared between callers and must be safe for
/// concurrent use. Whatever error `perform` returns reaches the caller
/// unchanged.
pub trait Transport: Send + Sync {
    /// The configuration requests are built against.
    fn config(&self) -> &TransportConfig;

    /// Executes `request` and returns the response with its body unread.
    fn perform(
        &self,
        request: reqwest::Request,
    ) -> impl Future<Output = Result<reqwest::Response, ApiError>> + Send;
}

/// Builds a request for `path` against the configured base URL.
///
/// `Accept: application/json` is always set; a body is sent as
/// `application/json` unless `headers` already names a content type.
///
/// ## Errors
///
/// Returns a [`ConfigError`](crate::error::ConfigError) if the path cannot
/// be turned into a URL.
pub fn new_request(
    config: &TransportConfig,
    method: RestMethod,
    path: &str,
    headers: HeaderMap,
    body: Option<Bytes>,
) -> Result<reqwest::Request, ApiError> {
    let url = config.endpoint_url(path)?;
    let mut request = reqwest::Request::new(method.into(), url);

    let request_headers = request.headers_mut();
    request_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    request_headers.extend(headers);

    if let Some(body) = body {
        request
            .headers_mut()
            .entry(CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));
        *request.body_mut() = Some(body.into());
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_new_request_get() {
        let config = TransportConfig::default();
        let request = new_request(
            &config,
            RestMethod::Get,
            "/graphs/hugegraph/schema/propertykeys/age",
            HeaderMap::new(),
            None,
        )
        .unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "http://127.0.0.1:8080/graphs/hugegraph/schema/propertykeys/age"
        );
        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert!(request.body().is_none());
        assert!(request.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_new_request_with_body() {
        let config = TransportConfig::default();
        let request = new_request(
            &config,
            RestMethod::Post,
            "/graphs/hugegraph/schema/propertykeys",
            HeaderMap::new(),
            Some(Bytes::from_static(br#"{"name":"age"}"#)),
        )
        .unwrap();

        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, br#"{"name":"age"}"#);
    }

    #[test]
    fn test_new_request_keeps_caller_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let request = new_request(
            &TransportConfig::default(),
            RestMethod::Put,
            "/graphs/hugegraph/jobs/gremlin",
            headers,
            Some(Bytes::from_static(b"g.V()")),
        )
        .unwrap();

        assert_eq!(request.headers()[CONTENT_TYPE], "text/plain");
    }

    #[test]
    fn test_new_request_bad_path() {
        let err = new_request(
            &TransportConfig::default(),
            RestMethod::Get,
            "graphs",
            HeaderMap::new(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Config(ConfigError::InvalidValue { .. })));
    }
}
