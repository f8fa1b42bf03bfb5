//! Data models for the `place` crate.
//!
//! `PlaceRecord` is the one canonical record shape: flattened address fields
//! and 64-bit coordinates. Records are immutable once built; a new decode
//! produces a new record rather than editing an old one.

use serde::Serialize;

use crate::fields::{Field, FieldValue};

/// A decoded place description. Every field is always populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlaceRecord {
    name: String,
    description: String,
    category: String,
    #[serde(rename = "address-title")]
    address_title: String,
    #[serde(rename = "address-street")]
    address_street: String,
    elevation: f64,
    latitude: f64,
    longitude: f64,
}

impl PlaceRecord {
    pub fn builder() -> PlaceRecordBuilder {
        PlaceRecordBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn address_title(&self) -> &str {
        &self.address_title
    }

    pub fn address_street(&self) -> &str {
        &self.address_street
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Value of a single field, as the field table sees it.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Name => FieldValue::Text(self.name.clone()),
            Field::Description => FieldValue::Text(self.description.clone()),
            Field::Category => FieldValue::Text(self.category.clone()),
            Field::AddressTitle => FieldValue::Text(self.address_title.clone()),
            Field::AddressStreet => FieldValue::Text(self.address_street.clone()),
            Field::Elevation => FieldValue::Number(self.elevation),
            Field::Latitude => FieldValue::Number(self.latitude),
            Field::Longitude => FieldValue::Number(self.longitude),
        }
    }

    /// Encodes the record with the same keys the decoder reads.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Builds a `PlaceRecord` from code. Unset fields keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct PlaceRecordBuilder {
    record: PlaceRecord,
}

impl PlaceRecordBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.record.category = category.into();
        self
    }

    pub fn address_title(mut self, title: impl Into<String>) -> Self {
        self.record.address_title = title.into();
        self
    }

    pub fn address_street(mut self, street: impl Into<String>) -> Self {
        self.record.address_street = street.into();
        self
    }

    /// Fills the flattened address fields from a full address.
    pub fn address(self, address: &Address) -> Self {
        self.address_title(address.title.clone())
            .address_street(address.street.clone())
    }

    pub fn elevation(mut self, elevation: f64) -> Self {
        self.record.elevation = elevation;
        self
    }

    pub fn latitude(mut self, latitude: f64) -> Self {
        self.record.latitude = latitude;
        self
    }

    pub fn longitude(mut self, longitude: f64) -> Self {
        self.record.longitude = longitude;
        self
    }

    /// Sets one field from a table value. A value of the wrong kind sets the
    /// field's default.
    pub fn set(self, field: Field, value: FieldValue) -> Self {
        match field {
            Field::Name => self.name(value.into_text()),
            Field::Description => self.description(value.into_text()),
            Field::Category => self.category(value.into_text()),
            Field::AddressTitle => self.address_title(value.into_text()),
            Field::AddressStreet => self.address_street(value.into_text()),
            Field::Elevation => self.elevation(value.as_number()),
            Field::Latitude => self.latitude(value.as_number()),
            Field::Longitude => self.longitude(value.as_number()),
        }
    }

    pub fn build(self) -> PlaceRecord {
        self.record
    }
}

/// A full postal address, as carried by the nested `address` input variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub title: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

impl Address {
    /// Reads an address object leniently: members that are absent or not
    /// strings come back empty.
    pub fn from_json_object(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let text = |key: &str| {
            object
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::to_owned)
                .unwrap_or_default()
        };

        Self {
            title: text("title"),
            street: text("street"),
            city: text("city"),
            state: text("state"),
            country: text("country"),
            zip_code: text("zipCode"),
        }
    }
}
