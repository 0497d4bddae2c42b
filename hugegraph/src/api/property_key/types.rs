use serde::{Deserialize, Serialize};

/// A property key schema element as returned by the server.
///
/// Fields missing from the JSON take their default value and unknown
/// fields are ignored, so newer servers decode without errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyKey {
    pub id: i64,
    pub name: String,
    /// e.g. `TEXT`, `INT`, `DATE`.
    pub data_type: String,
    /// `SINGLE`, `LIST`, or `SET`.
    pub cardinality: String,
    pub aggregate_type: String,
    pub write_type: String,
    /// Nested properties; the server leaves this untyped.
    pub properties: Vec<serde_json::Value>,
    pub status: String,
    pub user_data: PropertyKeyUserData,
}

/// Free-form user data attached to a property key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyKeyUserData {
    pub min: i64,
    pub max: i64,
    #[serde(rename = "~create_time")]
    pub create_time: String,
}

/// Body of the "list property keys" response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyKeyCollection {
    pub propertykeys: Vec<PropertyKey>,
}
