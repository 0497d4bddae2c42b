//! Errors for request values rejected before dispatch.

use thiserror::Error;

/// A request value that cannot be sent.
///
/// Raised before the transport is touched, so no network I/O has happened
/// when one of these comes back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// A required parameter was never set, or was set to an empty string.
    #[error("{endpoint} must set {parameter}")]
    MissingParameter {
        /// Id of the endpoint being called.
        endpoint: &'static str,
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// The path template references a placeholder with no value.
    #[error("{endpoint}: no value for path placeholder `{placeholder}`")]
    UnresolvedPlaceholder {
        /// Id of the endpoint being called.
        endpoint: &'static str,
        /// The placeholder name, without braces.
        placeholder: String,
    },

    /// A path value that would not stay in its own segment once the URL is
    /// normalized, such as `.` or `..`.
    #[error("{endpoint}: `{value}` is not a valid {parameter}")]
    InvalidParameter {
        /// Id of the endpoint being called.
        endpoint: &'static str,
        /// The placeholder the value was given for.
        parameter: String,
        /// The rejected value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_names_the_field() {
        let err = RequestError::MissingParameter {
            endpoint: "get_by_name",
            parameter: "name",
        };
        assert_eq!(err.to_string(), "get_by_name must set name");
    }

    #[test]
    fn test_unresolved_placeholder() {
        let err = RequestError::UnresolvedPlaceholder {
            endpoint: "list",
            placeholder: "graph".to_string(),
        };
        assert_eq!(err.to_string(), "list: no value for path placeholder `graph`");
    }

    #[test]
    fn test_invalid_parameter_quotes_the_value() {
        let err = RequestError::InvalidParameter {
            endpoint: "get_by_name",
            parameter: "name".to_string(),
            value: "..".to_string(),
        };
        assert_eq!(err.to_string(), "get_by_name: `..` is not a valid name");
    }
}
