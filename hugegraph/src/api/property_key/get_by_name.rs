//! Get a property key by name.
//!
//! `GET /graphs/{graph}/schema/propertykeys/{name}`

use super::PropertyKey;
use crate::api::{RequestOptions, dispatch, request_options};
use crate::endpoint::Endpoint;
use crate::error::{ApiError, RequestError};
use crate::method::RestMethod;
use crate::response::{RawResponse, Response};
use crate::transport::Transport;

pub const GET_BY_NAME: Endpoint = Endpoint::new(
    "get_by_name",
    RestMethod::Get,
    "/graphs/{graph}/schema/propertykeys/{name}",
);

/// Request value for fetching one property key.
///
/// Built by [`PropertyKeyApi::get_by_name`](super::PropertyKeyApi::get_by_name)
/// and consumed by [`send`](Self::send), so a value is used for exactly one
/// call.
///
/// ## Examples
///
/// ```rust,ignore
/// use tokio_util::sync::CancellationToken;
///
/// let token = CancellationToken::new();
/// let response = client
///     .property_keys()
///     .get_by_name()
///     .name("age")
///     .cancel_token(token.clone())
///     .send()
///     .await?;
///
/// println!("{} is {}", response.data().name, response.data().data_type);
/// ```
#[derive(Debug)]
#[must_use = "a request does nothing until `send` is awaited"]
pub struct PropertyKeyGetByName<'a, T: Transport> {
    transport: &'a T,
    name: Option<String>,
    options: RequestOptions,
}

impl<'a, T: Transport> PropertyKeyGetByName<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            transport,
            name: None,
            options: RequestOptions::default(),
        }
    }

    /// Sets the property key name to look up. Required.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Performs the request and returns the response with its body unread.
    ///
    /// ## Errors
    ///
    /// Returns [`RequestError::MissingParameter`] without touching the
    /// transport when no non-empty name was set. Transport errors are
    /// returned unchanged.
    pub async fn send_raw(self) -> Result<RawResponse, ApiError> {
        let name = self
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(RequestError::MissingParameter {
                endpoint: GET_BY_NAME.id(),
                parameter: "name",
            })?;
        let graph = self.transport.config().graph();

        dispatch(
            self.transport,
            &GET_BY_NAME,
            &[("graph", graph), ("name", name)],
            self.options,
        )
        .await
    }

    /// Performs the request and decodes the property key.
    ///
    /// ## Errors
    ///
    /// As [`send_raw`](Self::send_raw), plus body read failures and
    /// [`ValidationError`](crate::error::ValidationError) when the body is
    /// not a property key.
    pub async fn send(self) -> Result<Response<PropertyKey>, ApiError> {
        self.send_raw().await?.into_response().await
    }
}

request_options!(PropertyKeyGetByName);
