//! Typed field readers over a wire-format JSON object.

use jiff::Timestamp;
use log::debug;
use serde_json::{Map, Value};

use crate::{
    error::{ParseError, Result},
    models::Record,
};

/// Read-only view over the keys of one JSON object.
///
/// Required readers fail when the key is absent or null. Optional readers
/// return `None` in that case, but still fail when a present value has the
/// wrong type.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    /// Borrow the fields of `value`, which must be a JSON object.
    pub fn of(value: &'a Value) -> Result<Self> {
        value
            .as_object()
            .map(|map| Self { map })
            .ok_or_else(|| ParseError::field("").not_an_object())
    }

    fn present(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    fn required(&self, key: &str) -> Result<&'a Value> {
        self.present(key)
            .ok_or_else(|| ParseError::field(key).missing())
    }

    pub fn u64(&self, key: &str) -> Result<u64> {
        to_u64(self.required(key)?, key)
    }

    pub fn opt_u64(&self, key: &str) -> Result<Option<u64>> {
        self.present(key).map(|value| to_u64(value, key)).transpose()
    }

    pub fn u32(&self, key: &str) -> Result<u32> {
        to_u32(self.required(key)?, key)
    }

    pub fn opt_u32(&self, key: &str) -> Result<Option<u32>> {
        self.present(key).map(|value| to_u32(value, key)).transpose()
    }

    pub fn bool(&self, key: &str) -> Result<bool> {
        to_bool(self.required(key)?, key)
    }

    pub fn opt_bool(&self, key: &str) -> Result<Option<bool>> {
        self.present(key).map(|value| to_bool(value, key)).transpose()
    }

    pub fn string(&self, key: &str) -> Result<String> {
        to_string(self.required(key)?, key)
    }

    pub fn opt_string(&self, key: &str) -> Result<Option<String>> {
        self.present(key)
            .map(|value| to_string(value, key))
            .transpose()
    }

    /// Identifier that may arrive as a string (GUID) or an integer.
    pub fn key_string(&self, key: &str) -> Result<String> {
        match self.required(key)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) if n.is_u64() => Ok(n.to_string()),
            _ => Err(ParseError::field(key).expected("string or unsigned integer")),
        }
    }

    /// Epoch-seconds timestamp, decoded as UTC.
    pub fn timestamp(&self, key: &str) -> Result<Timestamp> {
        to_timestamp(self.required(key)?, key)
    }

    pub fn opt_timestamp(&self, key: &str) -> Result<Option<Timestamp>> {
        self.present(key)
            .map(|value| to_timestamp(value, key))
            .transpose()
    }

    pub fn opt_u64_list(&self, key: &str) -> Result<Option<Vec<u64>>> {
        let Some(value) = self.present(key) else {
            return Ok(None);
        };
        let items = value
            .as_array()
            .ok_or_else(|| ParseError::field(key).expected("array of unsigned integers"))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| to_u64(item, &format!("{key}[{index}]")))
            .collect::<Result<Vec<_>>>()
            .map(Some)
    }

    /// Nested record collection, in wire order.
    ///
    /// Only a JSON array is mapped. Anything else yields `None`, which
    /// callers can tell apart from an empty array.
    pub fn opt_records<R: Record>(&self, key: &str) -> Result<Option<Vec<R>>> {
        match self.present(key) {
            Some(Value::Array(items)) => parse_records(items, key).map(Some),
            Some(_) => {
                debug!("Ignoring non-array '{key}' while parsing {}", R::KIND);
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

/// Parse every non-null element of `items` through `R::parse`, keeping order.
pub(crate) fn parse_records<R: Record>(items: &[Value], path: &str) -> Result<Vec<R>> {
    let mut records = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        if item.is_null() {
            debug!("Skipping null {} at {path}[{index}]", R::KIND);
            continue;
        }
        let record = R::parse(item).map_err(|e| e.within(&format!("{path}[{index}]")))?;
        records.push(record);
    }

    Ok(records)
}

/// Integer view of a scalar: JSON integers, integral floats and numeric
/// strings all convert; anything else is an `InvalidType` error.
fn to_integer(value: &Value, key: &str, expected: &'static str) -> Result<i128> {
    let converted = match value {
        Value::Number(n) => n
            .as_u64()
            .map(i128::from)
            .or_else(|| n.as_i64().map(i128::from))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i128)
            }),
        Value::String(s) => s.trim().parse::<i128>().ok(),
        _ => None,
    };

    converted.ok_or_else(|| ParseError::field(key).expected(expected))
}

fn to_u64(value: &Value, key: &str) -> Result<u64> {
    let wide = to_integer(value, key, "unsigned integer")?;
    u64::try_from(wide).map_err(|_| ParseError::field(key).out_of_range(wide))
}

fn to_u32(value: &Value, key: &str) -> Result<u32> {
    let wide = to_u64(value, key)?;
    u32::try_from(wide).map_err(|_| ParseError::field(key).out_of_range(wide))
}

fn to_bool(value: &Value, key: &str) -> Result<bool> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::String(s) if s.trim().eq_ignore_ascii_case("true") => Ok(true),
        Value::String(s) if s.trim().eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(ParseError::field(key).expected("boolean")),
    }
}

fn to_string(value: &Value, key: &str) -> Result<String> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| ParseError::field(key).expected("string"))
}

fn to_timestamp(value: &Value, key: &str) -> Result<Timestamp> {
    let wide = to_integer(value, key, "integer epoch seconds")?;

    i64::try_from(wide)
        .ok()
        .and_then(|seconds| Timestamp::from_second(seconds).ok())
        .ok_or_else(|| ParseError::field(key).out_of_range(wide))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_required_missing_and_null() {
        let value = json!({"id": null});
        let fields = Fields::of(&value).unwrap();

        assert!(matches!(
            fields.u64("id"),
            Err(ParseError::MissingField { field }) if field == "id"
        ));
        assert!(matches!(
            fields.string("name"),
            Err(ParseError::MissingField { field }) if field == "name"
        ));
    }

    #[test]
    fn test_optional_absent_null_and_wrong_type() {
        let value = json!({"milestone_id": null, "assignedto_id": "seven"});
        let fields = Fields::of(&value).unwrap();

        assert_eq!(fields.opt_u64("milestone_id").unwrap(), None);
        assert_eq!(fields.opt_u64("missing").unwrap(), None);
        assert!(matches!(
            fields.opt_u64("assignedto_id"),
            Err(ParseError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_integer_ranges() {
        let value = json!({"negative": -1, "wide": 4_294_967_296u64, "float": 1.5});
        let fields = Fields::of(&value).unwrap();

        assert!(matches!(
            fields.u64("negative"),
            Err(ParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            fields.u32("wide"),
            Err(ParseError::OutOfRange { .. })
        ));
        assert_eq!(fields.u64("wide").unwrap(), 4_294_967_296);
        assert!(matches!(
            fields.u64("float"),
            Err(ParseError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_timestamps() {
        let value = json!({"zero": 0, "day": 86_400, "text": "2022-01-01"});
        let fields = Fields::of(&value).unwrap();

        assert_eq!(fields.timestamp("zero").unwrap(), Timestamp::UNIX_EPOCH);
        assert_eq!(
            fields.opt_timestamp("day").unwrap(),
            Some(Timestamp::from_second(86_400).unwrap())
        );
        assert_eq!(fields.opt_timestamp("absent").unwrap(), None);
        assert!(fields.timestamp("text").is_err());
    }

    #[test]
    fn test_key_string_accepts_guid_or_integer() {
        let value = json!({"guid": "3933d74b-4282-4c1f-be62-a641ab427063", "num": 12});
        let fields = Fields::of(&value).unwrap();

        assert_eq!(
            fields.key_string("guid").unwrap(),
            "3933d74b-4282-4c1f-be62-a641ab427063"
        );
        assert_eq!(fields.key_string("num").unwrap(), "12");
    }

    #[test]
    fn test_key_string_rejects_negative_and_fractional() {
        let value = json!({"negative": -3, "float": 1.5});
        let fields = Fields::of(&value).unwrap();

        assert!(matches!(
            fields.key_string("negative"),
            Err(ParseError::InvalidType { .. })
        ));
        assert!(matches!(
            fields.key_string("float"),
            Err(ParseError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_convertible_scalars_are_accepted() {
        let value = json!({
            "id": "81",
            "padded": " 42 ",
            "float": 81.0,
            "count": "17",
            "done": "true",
            "open": "False",
            "created_on": "86400"
        });
        let fields = Fields::of(&value).unwrap();

        assert_eq!(fields.u64("id").unwrap(), 81);
        assert_eq!(fields.opt_u64("padded").unwrap(), Some(42));
        assert_eq!(fields.u64("float").unwrap(), 81);
        assert_eq!(fields.u32("count").unwrap(), 17);
        assert!(fields.bool("done").unwrap());
        assert_eq!(fields.opt_bool("open").unwrap(), Some(false));
        assert_eq!(
            fields.timestamp("created_on").unwrap(),
            Timestamp::from_second(86_400).unwrap()
        );
    }

    #[test]
    fn test_inconvertible_scalars_are_rejected() {
        let value = json!({
            "word": "eighty",
            "fraction": "1.5",
            "array": [1],
            "yes": "yes",
            "one": 1,
            "negative_text": "-4"
        });
        let fields = Fields::of(&value).unwrap();

        assert!(matches!(
            fields.u64("word"),
            Err(ParseError::InvalidType { .. })
        ));
        assert!(matches!(
            fields.u64("fraction"),
            Err(ParseError::InvalidType { .. })
        ));
        assert!(matches!(
            fields.u64("array"),
            Err(ParseError::InvalidType { .. })
        ));
        assert!(matches!(
            fields.bool("yes"),
            Err(ParseError::InvalidType { .. })
        ));
        assert!(matches!(
            fields.bool("one"),
            Err(ParseError::InvalidType { .. })
        ));
        assert!(matches!(
            fields.u64("negative_text"),
            Err(ParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_timestamp_beyond_i64_is_out_of_range() {
        let value = json!({"far": u64::MAX, "huge": 9_000_000_000_000_000_000i64});
        let fields = Fields::of(&value).unwrap();

        assert!(matches!(
            fields.timestamp("far"),
            Err(ParseError::OutOfRange { field, .. }) if field == "far"
        ));
        assert!(matches!(
            fields.opt_timestamp("huge"),
            Err(ParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_non_array_records_are_none() {
        use crate::models::PlanEntry;

        let value = json!({"entries": {"id": "e1"}, "runs": "none"});
        let fields = Fields::of(&value).unwrap();

        assert!(fields.opt_records::<PlanEntry>("entries").unwrap().is_none());
        assert!(fields.opt_records::<PlanEntry>("runs").unwrap().is_none());
    }

    #[test]
    fn test_u64_list_reports_index() {
        let value = json!({"case_ids": [1, 2, "x"]});
        let fields = Fields::of(&value).unwrap();

        let err = fields.opt_u64_list("case_ids").unwrap_err();
        assert_eq!(err.field_path(), Some("case_ids[2]"));
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(
            Fields::of(&json!([1, 2])),
            Err(ParseError::NotAnObject { .. })
        ));
    }
}
