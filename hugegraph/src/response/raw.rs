use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{Response, decode_json};
use crate::error::{ApiError, ClientError};

/// A transport response whose body has not been read yet.
///
/// The caller owns the underlying connection. Dropping the handle releases
/// it; [`into_response`](Self::into_response) reads and decodes in one step;
/// [`into_inner`](Self::into_inner) hands over the `reqwest::Response` for
/// chunked streaming.
#[derive(Debug)]
pub struct RawResponse {
    inner: reqwest::Response,
}

impl RawResponse {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    pub fn status_code(&self) -> StatusCode {
        self.inner.status()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// Returns the underlying response for streaming with
    /// `chunk()` or `bytes_stream()`.
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }

    /// Reads the whole body into memory.
    ///
    /// ## Errors
    ///
    /// Returns [`ClientError::Request`] if the body cannot be read.
    pub async fn bytes(self) -> Result<Bytes, ApiError> {
        Ok(self.inner.bytes().await.map_err(ClientError::Request)?)
    }

    /// Reads the whole body and decodes it as JSON into `T`.
    ///
    /// ## Errors
    ///
    /// Returns [`ClientError::Request`] if the body cannot be read and
    /// [`ValidationError`](crate::error::ValidationError) if it does not
    /// decode.
    pub async fn into_response<T: DeserializeOwned>(self) -> Result<Response<T>, ApiError> {
        let status_code = self.inner.status();
        let headers = self.inner.headers().clone();
        let body = self.inner.bytes().await.map_err(ClientError::Request)?;

        debug!(
            http.status_code = status_code.as_u16(),
            body_len = body.len(),
            "decoding response body"
        );
        let data = decode_json(&body)?;

        Ok(Response::new(status_code, headers, body, data))
    }
}
