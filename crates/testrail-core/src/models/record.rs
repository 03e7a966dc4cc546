//! The mapping contract shared by every record type.

use serde_json::Value;

use crate::{
    error::{ParseError, Result},
    json::fields::parse_records,
};

/// A typed TestRail resource with a bidirectional JSON mapping.
///
/// `parse` is fail-fast: a missing or wrong-typed required field returns an
/// error and no partially filled record. `to_json` is sparse: it emits only
/// the user-settable fields that are currently set, which makes the result
/// usable as a create/update request body.
pub trait Record: Sized {
    /// Human-readable record kind used in log messages
    const KIND: &'static str;

    /// Map a wire-format JSON object onto a typed record.
    fn parse(json: &Value) -> Result<Self>;

    /// Build the sparse request payload for this record.
    fn to_json(&self) -> Value;

    /// The JSON object this record was parsed from, if any.
    fn raw_json(&self) -> Option<&Value>;

    /// Parse JSON text, then map it onto a record.
    fn parse_str(text: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(text)?;
        Self::parse(&json)
    }
}

/// Parse a top-level JSON array of records, as returned by list endpoints.
///
/// Order is preserved and null elements are skipped. Error paths start with
/// the element index, e.g. `[2].entries[0].id`.
pub fn parse_list<R: Record>(json: &Value) -> Result<Vec<R>> {
    let items = json
        .as_array()
        .ok_or_else(|| ParseError::field("").expected("array"))?;
    parse_records(items, "")
}

/// The original response object a record was parsed from.
///
/// Kept for diagnostics only. It is never re-serialized and two sources
/// always compare equal, so records built by hand and records parsed from
/// the wire can be compared field by field.
#[derive(Debug, Clone, Default)]
pub struct RawJson(Option<Value>);

impl RawJson {
    pub fn new(json: &Value) -> Self {
        Self(Some(json.clone()))
    }

    pub fn get(&self) -> Option<&Value> {
        self.0.as_ref()
    }
}

impl PartialEq for RawJson {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}
