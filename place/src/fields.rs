//! The fixed table of fields a place record is decoded from.
//!
//! Each `Field` knows its JSON key, the kind of value it expects, the default
//! it falls back to, and the label a form shows next to it. The decoder walks
//! `Field::ALL` instead of casting each key by hand.

use std::fmt;

use serde_json::Value;

/// Kind of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

impl FieldKind {
    /// Converts a JSON value into this kind, or `None` when it is the wrong type.
    ///
    /// Numbers accept both integer and floating-point JSON numbers and are
    /// widened to `f64`. Strings are never parsed as numbers.
    pub fn coerce(self, value: &Value) -> Option<FieldValue> {
        match (self, value) {
            (FieldKind::Text, Value::String(s)) => Some(FieldValue::Text(s.clone())),
            (FieldKind::Number, Value::Number(n)) => n.as_f64().map(FieldValue::Number),
            _ => None,
        }
    }

    pub fn default_value(self) -> FieldValue {
        match self {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Number => FieldValue::Number(0.0),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => f.write_str("string"),
            FieldKind::Number => f.write_str("number"),
        }
    }
}

/// A decoded (or defaulted) value for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Number(_) => String::new(),
        }
    }

    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(_) => 0.0,
        }
    }
}

/// Every field of a place record, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Category,
    AddressTitle,
    AddressStreet,
    Elevation,
    Latitude,
    Longitude,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Description,
        Field::Category,
        Field::AddressTitle,
        Field::AddressStreet,
        Field::Elevation,
        Field::Latitude,
        Field::Longitude,
    ];

    /// Key of this field in the flattened JSON input.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Category => "category",
            Field::AddressTitle => "address-title",
            Field::AddressStreet => "address-street",
            Field::Elevation => "elevation",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
        }
    }

    /// Key inside a nested `address` object that can stand in for this field.
    pub fn nested_address_key(self) -> Option<&'static str> {
        match self {
            Field::AddressTitle => Some("title"),
            Field::AddressStreet => Some("street"),
            _ => None,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Elevation | Field::Latitude | Field::Longitude => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Category => "Category",
            Field::AddressTitle => "Address Title",
            Field::AddressStreet => "Address Street",
            Field::Elevation => "Elevation",
            Field::Latitude => "Latitude",
            Field::Longitude => "Longitude",
        }
    }

    pub fn default_value(self) -> FieldValue {
        self.kind().default_value()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
