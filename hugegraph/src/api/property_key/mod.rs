//! Property key schema endpoints.
//!
//! A property key is a named, typed attribute that vertex and edge labels
//! reference. See the HugeGraph RESTful API docs, section "PropertyKey".

mod get_by_name;
mod list;
mod types;

pub use get_by_name::{GET_BY_NAME, PropertyKeyGetByName};
pub use list::{LIST, PropertyKeyList};
pub use types::{PropertyKey, PropertyKeyCollection, PropertyKeyUserData};

use crate::transport::Transport;

/// Property key endpoints bound to a shared transport.
///
/// Obtained from [`HugeGraphClient::property_keys`](crate::HugeGraphClient::property_keys).
#[derive(Debug)]
pub struct PropertyKeyApi<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> PropertyKeyApi<'a, T> {
    pub(crate) fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Starts a "get property key by name" request.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// let age = client.property_keys().get_by_name().name("age").send().await?;
    /// assert_eq!(age.data().data_type, "INT");
    /// ```
    pub fn get_by_name(&self) -> PropertyKeyGetByName<'a, T> {
        PropertyKeyGetByName::new(self.transport)
    }

    /// Starts a "list property keys" request.
    pub fn list(&self) -> PropertyKeyList<'a, T> {
        PropertyKeyList::new(self.transport)
    }
}
