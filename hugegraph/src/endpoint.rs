//! Static endpoint definitions.
//!
//! An [`Endpoint`] describes one HugeGraph REST route: its id, HTTP method,
//! and a path template such as `/graphs/{graph}/schema/propertykeys/{name}`.
//! Bindings declare their endpoint as a `const` and render the template with
//! the values they were configured with.

use crate::error::RequestError;
use crate::method::RestMethod;

/// A REST endpoint definition.
///
/// ## Examples
///
/// ```rust
/// use hugegraph::{Endpoint, RestMethod};
///
/// const GET_VERTEX_LABEL: Endpoint =
///     Endpoint::new("get_vertex_label", RestMethod::Get, "/graphs/{graph}/schema/vertexlabels/{name}");
///
/// let path = GET_VERTEX_LABEL
///     .render(&[("graph", "hugegraph"), ("name", "person")])
///     .unwrap();
/// assert_eq!(path, "/graphs/hugegraph/schema/vertexlabels/person");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    id: &'static str,
    method: RestMethod,
    path: &'static str,
}

impl Endpoint {
    /// Declares an endpoint.
    pub const fn new(id: &'static str, method: RestMethod, path: &'static str) -> Self {
        Self { id, method, path }
    }

    /// Returns the endpoint's identifier.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Returns the HTTP method for this endpoint.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the unrendered path template.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Extracts placeholder names from the template, in order of appearance.
    pub fn path_params(&self) -> Vec<&'static str> {
        let mut params = Vec::new();
        let mut rest = self.path;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            if close > 0 {
                params.push(&after[..close]);
            }
            rest = &after[close + 1..];
        }
        params
    }

    /// Substitutes every `{placeholder}` with its value from `params`.
    ///
    /// Values are percent-encoded as single path segments, so a name such as
    /// `a/b` renders as `a%2Fb` and cannot escape its segment.
    ///
    /// ## Errors
    ///
    /// Returns [`RequestError::UnresolvedPlaceholder`] when the template
    /// names a placeholder that `params` does not supply, and
    /// [`RequestError::InvalidParameter`] for a value of `.` or `..`, which
    /// URL normalization would collapse into a different path.
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String, RequestError> {
        let mut out = String::with_capacity(self.path.len());
        let mut rest = self.path;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| self.unresolved(after))?;
            let name = &after[..close];
            let value = params
                .iter()
                .find_map(|(key, value)| (*key == name).then_some(*value))
                .ok_or_else(|| self.unresolved(name))?;
            if is_dot_segment(value) {
                return Err(RequestError::InvalidParameter {
                    endpoint: self.id,
                    parameter: name.to_string(),
                    value: value.to_string(),
                });
            }
            out.push_str(&urlencoding::encode(value));
            rest = &after[close + 1..];
        }
        out.push_str(rest);

        Ok(out)
    }

    fn unresolved(&self, placeholder: &str) -> RequestError {
        RequestError::UnresolvedPlaceholder {
            endpoint: self.id,
            placeholder: placeholder.to_string(),
        }
    }
}

/// `.` and `..` pass through percent-encoding unchanged and are removed by
/// WHATWG path normalization.
pub(crate) fn is_dot_segment(value: &str) -> bool {
    matches!(value, "." | "..")
}
