//! Transport configuration errors.

use thiserror::Error;

/// Errors in transport configuration or request construction.
///
/// These errors occur during client setup or while turning a path into a
/// URL, typically indicating programmer errors or invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required configuration field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A configuration field holds an unusable value.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        /// The name of the offending field.
        field: &'static str,
        /// What is wrong with the value.
        message: String,
    },

    /// A header name or value could not be encoded.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field() {
        let err = ConfigError::missing_field("password");
        assert_eq!(err.to_string(), "Missing required field: password");
    }

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_invalid_value() {
        let err = ConfigError::invalid_value("graph", "must not be empty");
        assert_eq!(err.to_string(), "Invalid value for graph: must not be empty");
    }
}
