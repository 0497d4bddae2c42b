//! Endpoint bindings.
//!
//! Each binding is a request value with chained setters and a `send()` that
//! validates, builds the request through [`new_request`], performs it on the
//! shared transport, and decodes the body. All bindings share the dispatch
//! path below, so they differ only in their endpoint, parameters, and
//! payload type.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use crate::endpoint::Endpoint;
use crate::error::{ApiError, ClientError};
use crate::response::RawResponse;
use crate::transport::{Transport, new_request};

pub mod property_key;

/// Settings every binding accepts in addition to its own parameters.
#[derive(Debug, Default)]
pub(crate) struct RequestOptions {
    body: Option<Bytes>,
    headers: HeaderMap,
    timeout: Option<Duration>,
    cancel: Option<CancellationToken>,
}

/// Generates the option setters shared by every request builder.
///
/// The builder must have an `options: RequestOptions` field.
macro_rules! request_options {
    ($builder:ident) => {
        impl<'a, T: $crate::transport::Transport> $builder<'a, T> {
            /// Attaches a raw request body.
            pub fn body(mut self, body: impl Into<::bytes::Bytes>) -> Self {
                self.options.set_body(body.into());
                self
            }

            /// Adds a header to this request only.
            pub fn header(
                mut self,
                name: ::reqwest::header::HeaderName,
                value: ::reqwest::header::HeaderValue,
            ) -> Self {
                self.options.set_header(name, value);
                self
            }

            /// Overrides the transport's timeout for this request.
            pub fn timeout(mut self, timeout: ::std::time::Duration) -> Self {
                self.options.set_timeout(timeout);
                self
            }

            /// Aborts the call with
            /// [`ClientError::Cancelled`](crate::error::ClientError::Cancelled)
            /// if `token` fires before the transport answers.
            pub fn cancel_token(mut self, token: ::tokio_util::sync::CancellationToken) -> Self {
                self.options.set_cancel(token);
                self
            }
        }
    };
}

pub(crate) use request_options;

impl RequestOptions {
    pub(crate) fn set_body(&mut self, body: Bytes) {
        self.body = Some(body);
    }

    pub(crate) fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    pub(crate) fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    pub(crate) fn set_cancel(&mut self, token: CancellationToken) {
        self.cancel = Some(token);
    }
}

/// Renders `endpoint`, builds the request, and performs it on `transport`.
///
/// Transport errors are returned exactly as the transport produced them.
#[instrument(
    name = "hugegraph_call",
    skip_all,
    fields(endpoint = endpoint.id())
)]
pub(crate) async fn dispatch<T: Transport>(
    transport: &T,
    endpoint: &Endpoint,
    params: &[(&str, &str)],
    options: RequestOptions,
) -> Result<RawResponse, ApiError> {
    let RequestOptions {
        body,
        headers,
        timeout,
        cancel,
    } = options;

    let path = endpoint.render(params)?;
    let mut request = new_request(transport.config(), endpoint.method(), &path, headers, body)?;
    if timeout.is_some() {
        *request.timeout_mut() = timeout;
    }

    debug!(method = %endpoint.method(), path = %path, "dispatching");

    let response = match cancel {
        Some(token) => {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!("cancelled before the transport answered");
                    return Err(ClientError::Cancelled.into());
                }
                result = transport.perform(request) => result?,
            }
        }
        None => transport.perform(request).await?,
    };

    Ok(RawResponse::new(response))
}
