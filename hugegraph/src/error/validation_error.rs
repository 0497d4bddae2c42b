//! Response decoding errors.

use thiserror::Error;

/// Errors while decoding a response body.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The body is not JSON, or not the expected shape.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Empty response body when content was expected.
    #[error("Empty response body")]
    EmptyBody,
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }
}
