use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

/// A decoded response.
///
/// Carries the transport metadata next to the decoded payload. The raw body
/// bytes are kept so callers can log or re-decode them; the connection has
/// already been released.
#[derive(Debug, Clone)]
pub struct Response<T> {
    status_code: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    data: T,
}

impl<T> Response<T> {
    pub(crate) fn new(status_code: StatusCode, headers: HeaderMap, body: Bytes, data: T) -> Self {
        Self {
            status_code,
            headers,
            body,
            data,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The body exactly as the server sent it.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The decoded payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the envelope, keeping only the payload.
    pub fn into_data(self) -> T {
        self.data
    }
}
