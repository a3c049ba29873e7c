//! Article analyzer domain logic.

pub mod model;

pub use model::{
    AnalysisResult, BiasAssessment, CredibilityAssessment, FactualityAssessment,
    SentimentAssessment,
};

use url::Url;

use crate::error::{NcError, NcResult};

/// Notice shown when the submitted URL does not parse.
pub const INVALID_URL_MESSAGE: &str =
    "Please enter a valid URL starting with http:// or https://";

/// Validate the article URL before any backend call is made.
///
/// The input must parse as an absolute URL; anything else is rejected
/// here so no request ever leaves the server for it.
pub fn validate_url(input: &str) -> NcResult<Url> {
    Url::parse(input.trim()).map_err(|_| NcError::validation(INVALID_URL_MESSAGE))
}
