//! Legacy spec shape: one flat attribute with its item list.
//!
//! JSON shape:
//! {
//!   "name": "Flags",                 // attribute key after migration
//!   "original_name": "Flags Field",  // display name
//!   "items": [
//!     {
//!       "name": "enabled",
//!       "original_name": "Enabled",
//!       "value": 1,
//!       "data_type": null,           // optional, defaults to "bytes"
//!       "data_length": 1
//!     },
//!     ...
//!   ]
//! }
//!
//! `value` and `data_length` are carried through untouched, so they stay
//! opaque JSON values here. Every other field is required; a missing one
//! fails deserialization with a named missing-field error.

use crate::spec::{AttributeSpec, ItemSpec, Specification};

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
pub struct LegacySpec {
    pub name: String,
    pub original_name: String,
    pub items: Vec<LegacyItem>,
}

/// Raw item shape as it appears in the legacy file.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyItem {
    pub name: String,
    pub original_name: String,
    pub value: Value,

    #[serde(default)]
    pub data_type: Option<String>,

    pub data_length: Value,
}

impl LegacySpec {
    /// Rebuild as the current nested shape: a single attribute keyed by
    /// `name`, items re-keyed by item name, `data_type` defaulted to
    /// "bytes" where the legacy file left it null or absent.
    ///
    /// A duplicate item name is not an error; the later item replaces the
    /// earlier one under that key.
    pub fn migrate(self) -> Specification {
        let mut items: BTreeMap<String, ItemSpec> = BTreeMap::new();
        for item in self.items {
            items.insert(
                item.name,
                ItemSpec {
                    value: item.value,
                    original_name: item.original_name,
                    data_type: item.data_type.unwrap_or_else(|| "bytes".to_string()),
                    data_length: item.data_length,
                },
            );
        }

        let mut attributes = BTreeMap::new();
        attributes.insert(
            self.name,
            AttributeSpec {
                original_name: self.original_name,
                value_type: "u16".to_string(),
                items,
            },
        );

        Specification {
            input_filepath: "somepath.h".to_string(),
            datetime: 0,
            enumerations: BTreeMap::new(),
            attributes,
        }
    }
}
