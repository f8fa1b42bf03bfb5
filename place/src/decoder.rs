//! Lenient decoding of JSON text into a `PlaceRecord`.
//!
//! Decoding never fails. Malformed input, or JSON that is not an object,
//! yields a fully defaulted record; each known key that is absent or of the
//! wrong type falls back to its own default while the rest decode normally.
//! Callers that care why can use `decode_detailed` or attach a diagnostic hook.

use std::fmt;

use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use crate::errors::{DecodeError, Diagnostic, FieldIssue, JsonKind};
use crate::fields::{Field, FieldValue};
use crate::models::{Address, PlaceRecord};

/// Key of the nested address object accepted in place of the flat keys.
const ADDRESS_KEY: &str = "address";

/// Callback told about input the decoder had to paper over.
pub type DiagnosticHook = Box<dyn Fn(&Diagnostic<'_>) + Send + Sync>;

/// How much of the input made it into the record.
#[derive(Debug)]
pub enum DecodeOutcome {
    /// Every known field came from the input.
    Complete,
    /// The input was an object, but these fields were defaulted.
    Defaulted(Vec<FieldIssue>),
    /// The input could not be read at all; every field is defaulted.
    Unparseable(DecodeError),
}

impl DecodeOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, DecodeOutcome::Complete)
    }

    /// Fields that fell back to a default. Empty for unparseable input,
    /// where everything did.
    pub fn issues(&self) -> &[FieldIssue] {
        match self {
            DecodeOutcome::Defaulted(issues) => issues,
            _ => &[],
        }
    }
}

impl fmt::Display for DecodeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeOutcome::Complete => f.write_str("all fields decoded"),
            DecodeOutcome::Defaulted(issues) => {
                write!(f, "{} field(s) defaulted: ", issues.len())?;
                for (i, issue) in issues.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{issue}")?;
                }
                Ok(())
            }
            DecodeOutcome::Unparseable(err) => write!(f, "{err}; showing defaults"),
        }
    }
}

/// A record together with how it was obtained.
#[derive(Debug)]
pub struct Decoded {
    pub record: PlaceRecord,
    pub outcome: DecodeOutcome,
    /// The nested `address` object, when the input carried one.
    pub address: Option<Address>,
}

impl Decoded {
    fn unparseable(err: DecodeError) -> Self {
        Self {
            record: PlaceRecord::default(),
            outcome: DecodeOutcome::Unparseable(err),
            address: None,
        }
    }
}

/// Decodes place descriptions, optionally reporting what it had to default.
#[derive(Default)]
pub struct PlaceDecoder {
    hook: Option<DiagnosticHook>,
}

impl fmt::Debug for PlaceDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaceDecoder")
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

impl PlaceDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A decoder that calls `hook` for malformed input, non-object input and
    /// mistyped fields. The hook cannot change the decoded record.
    pub fn with_hook<F>(hook: F) -> Self
    where
        F: Fn(&Diagnostic<'_>) + Send + Sync + 'static,
    {
        Self {
            hook: Some(Box::new(hook)),
        }
    }

    pub fn decode(&self, json_text: &str) -> PlaceRecord {
        self.decode_detailed(json_text).record
    }

    pub fn decode_detailed(&self, json_text: &str) -> Decoded {
        trace!(len = json_text.len(), "decoding place description");

        match serde_json::from_str::<Value>(json_text) {
            Ok(value) => self.decode_value(&value),
            Err(err) => self.give_up(DecodeError::Malformed(err)),
        }
    }

    /// Decodes an already parsed JSON value.
    pub fn decode_value(&self, value: &Value) -> Decoded {
        match value.as_object() {
            Some(object) => self.decode_object(object),
            None => self.give_up(DecodeError::NotAnObject {
                found: JsonKind::of(value),
            }),
        }
    }

    fn decode_object(&self, object: &Map<String, Value>) -> Decoded {
        let nested = object.get(ADDRESS_KEY).and_then(Value::as_object);
        let address = nested.map(Address::from_json_object);
        let mut builder = match &address {
            Some(address) => PlaceRecord::builder().address(address),
            None => PlaceRecord::builder(),
        };
        let mut issues = Vec::new();

        for field in Field::ALL {
            match resolve(object, nested, field) {
                Ok(Some(value)) => builder = builder.set(field, value),
                // already filled from the nested address
                Ok(None) => {}
                Err(issue) => {
                    if let FieldIssue::Mistyped { field, found } = issue {
                        debug!(field = field.key(), %found, "mistyped field, using default");
                        self.report(&Diagnostic::Mistyped { field, found });
                    }
                    builder = builder.set(field, field.default_value());
                    issues.push(issue);
                }
            }
        }

        let outcome = if issues.is_empty() {
            DecodeOutcome::Complete
        } else {
            DecodeOutcome::Defaulted(issues)
        };

        Decoded {
            record: builder.build(),
            outcome,
            address,
        }
    }

    fn give_up(&self, err: DecodeError) -> Decoded {
        warn!(error = %err, "unreadable place description, using defaults");
        self.report(&Diagnostic::Unparseable(&err));
        Decoded::unparseable(err)
    }

    fn report(&self, diagnostic: &Diagnostic<'_>) {
        if let Some(hook) = &self.hook {
            hook(diagnostic);
        }
    }
}

/// Looks a field up by its flat key, falling back to the nested `address`
/// object for the address fields. A flat key that is present always wins,
/// even when it has the wrong type.
///
/// `Ok(None)` means the nested address supplies the value.
fn resolve(
    object: &Map<String, Value>,
    nested: Option<&Map<String, Value>>,
    field: Field,
) -> Result<Option<FieldValue>, FieldIssue> {
    if let Some(value) = object.get(field.key()) {
        return field.kind().coerce(value).map(Some).ok_or(FieldIssue::Mistyped {
            field,
            found: JsonKind::of(value),
        });
    }

    let member = field
        .nested_address_key()
        .zip(nested)
        .and_then(|(key, nested)| nested.get(key));

    match member {
        Some(value) if field.kind().coerce(value).is_some() => Ok(None),
        Some(value) => Err(FieldIssue::Mistyped {
            field,
            found: JsonKind::of(value),
        }),
        None => Err(FieldIssue::Missing { field }),
    }
}

/// Decodes `json_text` with a default decoder. Never fails.
pub fn decode(json_text: &str) -> PlaceRecord {
    PlaceDecoder::new().decode(json_text)
}
