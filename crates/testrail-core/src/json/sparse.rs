//! Sparse JSON object builder for request payloads.

use serde_json::{Map, Value};

use crate::models::Record;

/// Builds a JSON object holding only the fields a caller has set.
///
/// Each method inserts its key only when the value counts as set: strings
/// that are not blank, options that hold a value, collections that are
/// present and non-empty.
#[derive(Debug, Default)]
pub struct SparseObject {
    map: Map<String, Value>,
}

impl SparseObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a string unless it is absent, empty or all whitespace.
    pub fn text(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(text) = value.filter(|text| !text.trim().is_empty()) {
            self.map.insert(key.to_string(), Value::from(text));
        }
        self
    }

    pub fn id(mut self, key: &str, value: Option<u64>) -> Self {
        if let Some(id) = value {
            self.map.insert(key.to_string(), Value::from(id));
        }
        self
    }

    pub fn flag(mut self, key: &str, value: Option<bool>) -> Self {
        if let Some(flag) = value {
            self.map.insert(key.to_string(), Value::from(flag));
        }
        self
    }

    pub fn ids(mut self, key: &str, value: Option<&[u64]>) -> Self {
        if let Some(ids) = value.filter(|ids| !ids.is_empty()) {
            self.map.insert(key.to_string(), Value::from(ids.to_vec()));
        }
        self
    }

    /// Insert nested records, each serialized through its own `to_json`.
    pub fn records<R: Record>(mut self, key: &str, value: Option<&[R]>) -> Self {
        if let Some(records) = value.filter(|records| !records.is_empty()) {
            let items = records.iter().map(Record::to_json).collect();
            self.map.insert(key.to_string(), Value::Array(items));
        }
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.map)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_blank_strings_are_skipped() {
        let value = SparseObject::new()
            .text("name", Some("Release 1.0"))
            .text("description", Some("  \t\n"))
            .text("refs", Some(""))
            .text("url", None)
            .build();

        assert_eq!(value, json!({"name": "Release 1.0"}));
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let value = SparseObject::new().text("name", Some(" padded ")).build();
        assert_eq!(value, json!({"name": " padded "}));
    }

    #[test]
    fn test_options_and_lists() {
        let value = SparseObject::new()
            .id("milestone_id", Some(0))
            .id("assignedto_id", None)
            .flag("include_all", Some(false))
            .ids("case_ids", Some(&[][..]))
            .ids("config_ids", Some(&[3, 1, 2][..]))
            .build();

        assert_eq!(
            value,
            json!({"milestone_id": 0, "include_all": false, "config_ids": [3, 1, 2]})
        );
    }

    #[test]
    fn test_empty_builder_is_empty_object() {
        assert_eq!(SparseObject::new().build(), json!({}));
    }
}
