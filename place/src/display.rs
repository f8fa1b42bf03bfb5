//! Read-only display rows for a place record.
//!
//! The form shows a record as a fixed list of labeled rows. Elevation is
//! rendered with one decimal digit and coordinates with six.

use std::fmt;

use crate::fields::{Field, FieldValue};
use crate::models::PlaceRecord;

/// One labeled, read-only row of a rendered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: String,
}

impl fmt::Display for DisplayRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

pub fn format_elevation(elevation: f64) -> String {
    format!("{elevation:.1}")
}

pub fn format_coordinate(degrees: f64) -> String {
    format!("{degrees:.6}")
}

/// Renders a single field the way the form shows it.
pub fn format_field(record: &PlaceRecord, field: Field) -> String {
    match (field, record.get(field)) {
        (Field::Elevation, FieldValue::Number(n)) => format_elevation(n),
        (_, FieldValue::Number(n)) => format_coordinate(n),
        (_, FieldValue::Text(s)) => s,
    }
}

/// All rows of a record, in the fixed display order.
pub fn rows(record: &PlaceRecord) -> Vec<DisplayRow> {
    Field::ALL
        .iter()
        .map(|&field| DisplayRow {
            label: field.label(),
            value: format_field(record, field),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn elevation_has_one_decimal() {
        assert_eq!(format_elevation(1384.0), "1384.0");
        assert_eq!(format_elevation(0.0), "0.0");
        assert_eq!(format_elevation(12.34), "12.3");
    }

    #[test]
    fn coordinates_have_six_decimals() {
        assert_eq!(format_coordinate(33.306388), "33.306388");
        assert_eq!(format_coordinate(-111.679121), "-111.679121");
        assert_eq!(format_coordinate(0.0), "0.000000");
        assert_eq!(format_coordinate(33.27532), "33.275320");
    }

    #[test]
    fn default_record_rows() {
        let rows = rows(&PlaceRecord::default());
        let values: Vec<_> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["", "", "", "", "", "0.0", "0.000000", "0.000000"]
        );
    }

    #[test]
    fn row_display_joins_label_and_value() {
        let row = DisplayRow {
            label: "Name",
            value: "ASU-Poly".into(),
        };
        assert_eq!(row.to_string(), "Name: ASU-Poly");
    }
}
