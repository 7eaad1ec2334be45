use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

/// A single value of a summary field
///
/// DocSums repeat an item name when a field carries several values (for
/// example multiple organism taxa), so a stored value is either one string
/// or an ordered list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Display form of the value; list values are joined with `", "`
    pub fn display(&self) -> String {
        match self {
            FieldValue::Single(value) => value.clone(),
            FieldValue::Multiple(values) => values.join(", "),
        }
    }
}

/// A GEO dataset summary record
///
/// Field names are discovered at parse time, so everything beyond the
/// identifier lives in a name-to-value map. Absent fields are simply
/// missing from the map, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GeoRecord {
    /// Internal numeric identifier as returned by ESearch
    pub id: String,
    /// Named summary fields keyed by the DocSum item name
    pub fields: HashMap<String, FieldValue>,
}

impl GeoRecord {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
        }
    }

    /// Insert a field value, promoting repeated names into ordered lists
    ///
    /// The first value seen for a name is stored directly. A second value
    /// promotes the entry to a list with the original value first; further
    /// values append in order of appearance.
    pub fn insert_field<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let value = value.into();
        match self.fields.entry(name.into()) {
            Entry::Vacant(entry) => {
                entry.insert(FieldValue::Single(value));
            }
            Entry::Occupied(mut entry) => {
                let existing = entry.get_mut();
                match std::mem::replace(existing, FieldValue::Multiple(Vec::new())) {
                    FieldValue::Single(first) => {
                        *existing = FieldValue::Multiple(vec![first, value]);
                    }
                    FieldValue::Multiple(mut values) => {
                        values.push(value);
                        *existing = FieldValue::Multiple(values);
                    }
                }
            }
        }
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Display form of a field, if present
    pub fn display_value(&self, name: &str) -> Option<String> {
        self.fields.get(name).map(FieldValue::display)
    }
}
