//! Current spec shape: a file-level header plus attributes keyed by name.
//!
//! Field order matters for readability of the rewritten file, so the structs
//! serialize in the order the downstream tooling declares them:
//! input_filepath, datetime, enumerations, attributes.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct Specification {
    /// Placeholder, always "somepath.h"; migration never knows a real header.
    pub input_filepath: String,

    /// Placeholder, always 0.
    pub datetime: u64,

    /// Reserved; migration always leaves this empty.
    pub enumerations: BTreeMap<String, Value>,

    pub attributes: BTreeMap<String, AttributeSpec>,
}

/// A named group of items, analogous to the whole legacy file.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeSpec {
    pub original_name: String,
    pub value_type: String,
    pub items: BTreeMap<String, ItemSpec>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemSpec {
    pub value: Value,
    pub original_name: String,
    pub data_type: String,
    pub data_length: Value,
}
