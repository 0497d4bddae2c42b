//! List every property key in the graph.
//!
//! `GET /graphs/{graph}/schema/propertykeys`

use super::PropertyKeyCollection;
use crate::api::{RequestOptions, dispatch, request_options};
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::RestMethod;
use crate::response::{RawResponse, Response};
use crate::transport::Transport;

pub const LIST: Endpoint = Endpoint::new("list", RestMethod::Get, "/graphs/{graph}/schema/propertykeys");

/// Request value for listing property keys.
#[derive(Debug)]
#[must_use = "a request does nothing until `send` is awaited"]
pub struct PropertyKeyList<'a, T: Transport> {
    transport: &'a T,
    options: RequestOptions,
}

impl<'a, T: Transport> PropertyKeyList<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self {
            transport,
            options: RequestOptions::default(),
        }
    }

    /// Performs the request and returns the response with its body unread.
    pub async fn send_raw(self) -> Result<RawResponse, ApiError> {
        let graph = self.transport.config().graph();
        dispatch(self.transport, &LIST, &[("graph", graph)], self.options).await
    }

    /// Performs the request and decodes the list.
    pub async fn send(self) -> Result<Response<PropertyKeyCollection>, ApiError> {
        self.send_raw().await?.into_response().await
    }
}

request_options!(PropertyKeyList);
