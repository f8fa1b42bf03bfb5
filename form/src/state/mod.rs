//! State owned by the form: the record on screen and the text being typed.
//!
//! The record is an immutable value behind an `Arc`. Submitting decodes the
//! pending text into a new record and swaps it in whole.

use std::sync::Arc;

use place::{DecodeOutcome, PlaceDecoder, PlaceRecord};
use tracing::info;

#[derive(Debug)]
pub struct FormState {
    decoder: PlaceDecoder,
    current: Arc<PlaceRecord>,
    input: String,
}

impl FormState {
    pub fn new(decoder: PlaceDecoder, initial: PlaceRecord) -> Self {
        Self {
            decoder,
            current: Arc::new(initial),
            input: String::new(),
        }
    }

    /// Starts from the record decoded out of `seed`.
    pub fn seeded(decoder: PlaceDecoder, seed: &str) -> Self {
        let initial = decoder.decode(seed);
        Self::new(decoder, initial)
    }

    pub fn current(&self) -> Arc<PlaceRecord> {
        Arc::clone(&self.current)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn has_input(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Whether the pending text already parses as one JSON value, i.e. the
    /// user has finished typing a document.
    pub fn input_is_complete(&self) -> bool {
        self.has_input() && serde_json::from_str::<serde_json::Value>(&self.input).is_ok()
    }

    /// Appends one line to the text-entry surface.
    pub fn push_line(&mut self, line: &str) {
        if !self.input.is_empty() {
            self.input.push('\n');
        }
        self.input.push_str(line);
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Decodes the pending text and replaces the current record with the
    /// result. Returns the outcome and the record that was replaced.
    pub fn submit(&mut self) -> (DecodeOutcome, Arc<PlaceRecord>) {
        let text = std::mem::take(&mut self.input);
        let decoded = self.decoder.decode_detailed(&text);
        info!(name = decoded.record.name(), complete = decoded.outcome.is_complete(), "record replaced");

        let previous = std::mem::replace(&mut self.current, Arc::new(decoded.record));
        (decoded.outcome, previous)
    }
}
