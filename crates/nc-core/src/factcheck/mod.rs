//! Fact-check lookup domain logic.

pub mod model;

pub use model::{Fact, FactLookup};

use crate::error::{NcError, NcResult};

/// Notice shown when the query field is empty.
pub const EMPTY_QUERY_MESSAGE: &str = "Enter a claim, link, or topic to search for.";

/// Validate the search query. Whitespace-only queries count as empty.
pub fn validate_query(input: &str) -> NcResult<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(NcError::validation(EMPTY_QUERY_MESSAGE))
    } else {
        Ok(trimmed)
    }
}
