//! Bias checker domain logic.

pub mod model;

pub use model::BiasResult;

use crate::error::{NcError, NcResult};

/// Notice shown when the text field is empty.
pub const EMPTY_TEXT_MESSAGE: &str = "Enter some text to check for bias.";

/// Validate the free-text input. Whitespace-only text counts as empty.
pub fn validate_text(input: &str) -> NcResult<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(NcError::validation(EMPTY_TEXT_MESSAGE))
    } else {
        Ok(trimmed)
    }
}
