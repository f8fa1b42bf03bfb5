use place::{decode, rows, DisplayRow, Field, PlaceDecoder, PlaceRecord};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn row(label: &'static str, value: &str) -> DisplayRow {
    DisplayRow {
        label,
        value: value.to_string(),
    }
}

#[test]
fn test_asu_poly_end_to_end() {
    let record = decode(
        r#"{"name": "ASU-Poly", "description": "Home of ASU's Software Engineering Programs", "category": "School", "address-title": "ASU Software Engineering", "address-street": "7171 W Sonoran Arroyo Mall", "elevation": 1384.0, "latitude": 33.306388, "longitude": -111.679121}"#,
    );

    assert_eq!(
        rows(&record),
        vec![
            row("Name", "ASU-Poly"),
            row("Description", "Home of ASU's Software Engineering Programs"),
            row("Category", "School"),
            row("Address Title", "ASU Software Engineering"),
            row("Address Street", "7171 W Sonoran Arroyo Mall"),
            row("Elevation", "1384.0"),
            row("Latitude", "33.306388"),
            row("Longitude", "-111.679121"),
        ]
    );
}

#[test]
fn test_integer_numbers_are_widened() {
    let record = decode(r#"{"elevation": 1384, "latitude": 33, "longitude": -111}"#);
    assert_eq!(record.elevation(), 1384.0);
    assert_eq!(record.latitude(), 33.0);
    assert_eq!(record.longitude(), -111.0);
}

#[test]
fn test_truncated_document_is_fully_defaulted() {
    let record = decode(r#"{"name": "ASU-Poly", "elevation": 13"#);
    assert_eq!(record, PlaceRecord::default());
}

#[test]
fn test_decoded_record_reencodes_to_equal_record() {
    let first = decode(r#"{"name": "Home", "category": "residence", "elevation": 1384.0, "latitude": 33.27532, "longitude": -111.87144}"#);
    let second = decode(&first.to_json().unwrap());
    assert_eq!(first, second);
}

fn text_value() -> impl Strategy<Value = Value> {
    ".{0,24}".prop_map(Value::String)
}

fn number_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i32>().prop_map(|n| json!(n)),
        (-1.0e7f64..1.0e7f64).prop_map(|n| json!(n)),
    ]
}

fn well_typed(field: Field) -> BoxedStrategy<Value> {
    match field.kind() {
        place::FieldKind::Text => text_value().boxed(),
        place::FieldKind::Number => number_value().boxed(),
    }
}

fn full_object() -> impl Strategy<Value = Map<String, Value>> {
    let strategies: Vec<_> = Field::ALL.iter().map(|&f| well_typed(f)).collect();
    strategies.prop_map(|values| {
        Field::ALL
            .iter()
            .zip(values)
            .map(|(f, v)| (f.key().to_string(), v))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_well_typed_objects_round_trip(object in full_object()) {
        let decoded = PlaceDecoder::new().decode_value(&Value::Object(object.clone()));
        prop_assert!(decoded.outcome.is_complete());

        for field in Field::ALL {
            let expected = field.kind().coerce(&object[field.key()]).unwrap();
            prop_assert_eq!(decoded.record.get(field), expected);
        }
    }

    #[test]
    fn prop_missing_keys_take_defaults(
        object in full_object(),
        keep in proptest::collection::vec(any::<bool>(), Field::ALL.len()),
    ) {
        let partial: Map<String, Value> = object
            .into_iter()
            .filter(|(key, _)| {
                let index = Field::ALL.iter().position(|f| f.key() == key).unwrap();
                keep[index]
            })
            .collect();
        let record = decode(&Value::Object(partial.clone()).to_string());

        for (index, field) in Field::ALL.iter().enumerate() {
            if !keep[index] {
                prop_assert_eq!(record.get(*field), field.default_value());
            } else {
                prop_assert_eq!(
                    record.get(*field),
                    field.kind().coerce(&partial[field.key()]).unwrap()
                );
            }
        }
    }

    #[test]
    fn prop_reencoding_is_idempotent(object in full_object()) {
        let first = decode(&Value::Object(object).to_string());
        let second = decode(&first.to_json().unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_arbitrary_text_never_panics(text in ".{0,64}") {
        let record = decode(&text);
        prop_assert_eq!(rows(&record).len(), Field::ALL.len());
    }
}
