//! Custom error types specific to the `place` crate.
//!
//! Decoding never fails from the caller's point of view: these types only
//! describe *why* a record ended up with defaulted fields. They surface through
//! `DecodeOutcome` and through the optional diagnostic hook of a decoder.

use std::fmt;

use serde_json::Value;

use crate::fields::Field;

/// The JSON type of a value, used to describe what was found instead of
/// what a field expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input that could not be read as a place description at all.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("input is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: JsonKind },
}

/// A single field that fell back to its default while decoding an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    Missing { field: Field },
    Mistyped { field: Field, found: JsonKind },
}

impl FieldIssue {
    pub fn field(&self) -> Field {
        match self {
            FieldIssue::Missing { field } | FieldIssue::Mistyped { field, .. } => *field,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing { field } => write!(f, "`{}` is missing", field.key()),
            FieldIssue::Mistyped { field, found } => write!(
                f,
                "`{}` should be a {}, found {}",
                field.key(),
                field.kind(),
                found
            ),
        }
    }
}

/// What a decoder's diagnostic hook is told about.
///
/// Missing keys are ordinary for this input and are not reported here.
#[derive(Debug, Clone, Copy)]
pub enum Diagnostic<'a> {
    Unparseable(&'a DecodeError),
    Mistyped { field: Field, found: JsonKind },
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Unparseable(err) => write!(f, "{err}"),
            Diagnostic::Mistyped { field, found } => {
                fmt::Display::fmt(&FieldIssue::Mistyped { field: *field, found: *found }, f)
            }
        }
    }
}
