//! Terminal form for place descriptions.
//!
//! Reads a JSON document from the user, decodes it leniently with the `place`
//! crate, and shows the result as read-only rows.

pub mod config;
pub mod errors;
pub mod session;
pub mod state;
pub mod view;

pub use config::FormConfig;
pub use errors::{FormError, Result};
