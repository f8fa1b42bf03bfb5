//! Central module for form configuration settings.
//!
//! Holds the document the form starts with, the log filter used when
//! `RUST_LOG` is not set, the input prompt, and whether decode outcomes are
//! reported after each submit. Overrides come from an optional JSON file
//! named on the command line.

use std::path::Path;

use serde::Deserialize;

use crate::errors::{FormError, Result};

/// The place shown before the user submits anything.
pub const DEFAULT_SEED: &str = r#"{
    "name": "Home",
    "description": "Home",
    "category": "residence",
    "address": {
        "title": "Joseph Lee",
        "street": "1741 W Flamingo Dr",
        "city": "Chandler",
        "state": "AZ",
        "country": "US",
        "zipCode": "85286"
    },
    "elevation": 1384.0,
    "latitude": 33.27532,
    "longitude": -111.87144
}"#;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub seed: String,
    pub log_filter: String,
    pub prompt: String,
    pub report_outcome: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            log_filter: "place=info,place_form=info".to_string(),
            prompt: "> ".to_string(),
            report_outcome: true,
        }
    }
}

impl FormConfig {
    /// Reads a JSON object of overrides; keys it leaves out keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(FormError::Config)
    }

    /// Defaults, overlaid with the JSON file at `path` when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json(&std::fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }
}
