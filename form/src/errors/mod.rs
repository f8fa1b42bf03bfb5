//! Application error types for the form shell.
//!
//! Decoding itself never fails; what can go wrong here is reading the
//! terminal, writing rows back to it, or being handed a bad configuration.

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormError>;
