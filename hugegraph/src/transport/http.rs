//! Request execution over `reqwest` with tracing instrumentation.

use reqwest::RequestBuilder;
use tracing::{Span, debug, instrument, warn};

use super::Transport;
use crate::config::TransportConfig;
use crate::error::{ApiError, AuthError, ClientError};

/// The production [`Transport`], backed by a pooled `reqwest::Client`.
///
/// Cloning is cheap and clones share the connection pool.
///
/// ## Examples
///
/// ```rust,ignore
/// use hugegraph::transport::HttpTransport;
/// use hugegraph::TransportConfig;
///
/// let config = TransportConfig::builder()
///     .base_url("http://localhost:8080")?
///     .credentials("admin", "pa")
///     .build()?;
/// let transport = HttpTransport::new(config)?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    config: TransportConfig,
}

impl HttpTransport {
    /// Builds a transport and its HTTP client from `config`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: TransportConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(config.default_headers().clone())
            .user_agent(config.user_agent())
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { client, config })
    }

    /// Wraps an existing `reqwest::Client`.
    ///
    /// The client's own timeout and default headers are used as-is; only
    /// credentials and per-request settings come from `config`.
    pub fn with_client(client: reqwest::Client, config: TransportConfig) -> Self {
        Self { client, config }
    }
}

impl Transport for HttpTransport {
    fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Sends the request and maps non-success statuses to errors.
    ///
    /// 401 becomes [`AuthError::AuthenticationFailed`], 403 becomes
    /// [`AuthError::InsufficientPermissions`], and any other non-2xx status
    /// becomes [`ClientError::HttpStatus`] carrying the response body.
    #[instrument(
        name = "hugegraph_request",
        skip(self, request),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn perform(&self, request: reqwest::Request) -> Result<reqwest::Response, ApiError> {
        let span = Span::current();
        span.record("http.method", request.method().as_str());
        span.record("http.url", request.url().as_str());

        let operation = format!("{} {}", request.method(), request.url().path());
        let timeout = request.timeout().copied().unwrap_or(self.config.timeout());

        let mut builder = RequestBuilder::from_parts(self.client.clone(), request);
        if let Some(username) = self.config.username() {
            builder = builder.basic_auth(username, self.config.password());
        }

        debug!(operation = %operation, "sending request");
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    duration_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                }
            } else if e.is_connect() {
                ClientError::Connection(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();
        let status_code = status.as_u16();
        span.record("http.status_code", status_code);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            span.record("otel.status_code", otel_status);
            warn!(status = status_code, operation = %operation, "request failed");

            if status_code == 401 {
                return Err(AuthError::AuthenticationFailed { message }.into());
            }
            if status_code == 403 {
                return Err(AuthError::InsufficientPermissions { operation }.into());
            }

            return Err(ClientError::HttpStatus {
                status: status_code,
                message,
            }
            .into());
        }

        span.record("otel.status_code", "OK");
        debug!(status = status_code, "request completed");

        Ok(response)
    }
}
