//! Core `place` crate for turning loosely-shaped JSON into place records.
//!
//! This crate defines the `PlaceRecord` value, the table of fields it is
//! decoded from, the lenient `PlaceDecoder` that never fails outright, and the
//! display rows a form renders from a record.

pub mod decoder;
pub mod display;
pub mod errors;
pub mod fields;
pub mod models;

// Re-exports for convenience
pub use decoder::*;
pub use display::*;
pub use errors::*;
pub use fields::*;
pub use models::*;
