//! Response handling.
//!
//! Every binding produces a [`RawResponse`] first: the transport's answer
//! with the body still unread. Most callers go straight to a decoded
//! [`Response`] envelope; callers streaming large bodies can keep the raw
//! handle instead.

mod envelope;
mod raw;

pub use envelope::Response;
pub use raw::RawResponse;

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Decodes a JSON body into `T`.
///
/// ## Errors
///
/// Returns [`ValidationError::EmptyBody`] for an empty or whitespace-only
/// body and [`ValidationError::JsonParse`] for anything that is not JSON of
/// the expected shape.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::EmptyBody);
    }
    serde_json::from_slice(body).map_err(ValidationError::JsonParse)
}
