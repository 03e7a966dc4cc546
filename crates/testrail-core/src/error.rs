//! Error types for record parsing.

use thiserror::Error;

/// Error raised when a JSON value cannot be mapped onto a record.
///
/// Every variant that concerns a field carries its path, relative to the
/// value handed to the outermost `parse` call (for example
/// `entries[1].runs[0].id`).
#[derive(Error, Debug)]
pub enum ParseError {
    /// A record position holds something other than a JSON object
    #[error("Expected a JSON object at {}", shown(.field))]
    NotAnObject { field: String },
    /// A required key is absent or null
    #[error("Missing required field {}", shown(.field))]
    MissingField { field: String },
    /// A value has an incompatible JSON type
    #[error("Invalid type for field {}: expected {expected}", shown(.field))]
    InvalidType {
        field: String,
        expected: &'static str,
    },
    /// An integer does not fit the declared type or timestamp range
    #[error("Value {value} for field {} is out of range", shown(.field))]
    OutOfRange { field: String, value: String },
    /// The input text is not valid JSON
    #[error("Malformed JSON: {source}")]
    Syntax {
        #[from]
        source: serde_json::Error,
    },
}

fn shown(field: &str) -> String {
    if field.is_empty() {
        "document root".to_string()
    } else {
        format!("'{field}'")
    }
}

/// Builder for field-scoped parse errors.
pub struct FieldErrorBuilder {
    field: String,
}

impl FieldErrorBuilder {
    /// Create a new builder for the given field path.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// The field is required but absent.
    pub fn missing(self) -> ParseError {
        ParseError::MissingField { field: self.field }
    }

    /// The field holds the wrong JSON type.
    pub fn expected(self, expected: &'static str) -> ParseError {
        ParseError::InvalidType {
            field: self.field,
            expected,
        }
    }

    /// The field holds an integer outside the accepted range.
    pub fn out_of_range(self, value: impl ToString) -> ParseError {
        ParseError::OutOfRange {
            field: self.field,
            value: value.to_string(),
        }
    }

    /// The field should hold a nested record object.
    pub fn not_an_object(self) -> ParseError {
        ParseError::NotAnObject { field: self.field }
    }
}

impl ParseError {
    /// Creates a builder for errors about a single field.
    pub fn field(field: impl Into<String>) -> FieldErrorBuilder {
        FieldErrorBuilder::new(field)
    }

    /// Returns the field path the error refers to, if any.
    pub fn field_path(&self) -> Option<&str> {
        match self {
            Self::NotAnObject { field }
            | Self::MissingField { field }
            | Self::InvalidType { field, .. }
            | Self::OutOfRange { field, .. } => Some(field),
            Self::Syntax { .. } => None,
        }
    }

    /// Prefix the field path with the position of the enclosing value.
    ///
    /// Called as errors bubble out of nested records so the final message
    /// names the full path, e.g. `entries[2]` + `runs[0].id`.
    pub fn within(self, prefix: &str) -> Self {
        let join = |field: String| {
            if field.is_empty() {
                prefix.to_string()
            } else if field.starts_with('[') {
                format!("{prefix}{field}")
            } else {
                format!("{prefix}.{field}")
            }
        };

        match self {
            Self::NotAnObject { field } => Self::NotAnObject { field: join(field) },
            Self::MissingField { field } => Self::MissingField { field: join(field) },
            Self::InvalidType { field, expected } => Self::InvalidType {
                field: join(field),
                expected,
            },
            Self::OutOfRange { field, value } => Self::OutOfRange {
                field: join(field),
                value,
            },
            syntax @ Self::Syntax { .. } => syntax,
        }
    }
}

/// Result type alias for record mapping
pub type Result<T> = std::result::Result<T, ParseError>;
