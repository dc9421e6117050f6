//! Error types for swipestudy-core.

use thiserror::Error;

/// Result type alias using ParseEnumError.
pub type Result<T> = std::result::Result<T, ParseEnumError>;

/// An enum string from storage or an API payload was not recognized.
#[derive(Debug, Error)]
#[error("unrecognized {what}: {value}")]
pub struct ParseEnumError {
    what: &'static str,
    value: String,
}

impl ParseEnumError {
    pub(crate) fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_string(),
        }
    }
}
