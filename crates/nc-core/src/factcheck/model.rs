//! Fact-check lookup response models.

use serde::{Deserialize, Serialize};

/// One published fact-check matching the query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fact {
    pub title: String,
    pub source: String,
    pub url: String,
    pub verdict: String,
    pub summary: String,
}

/// Response of `/api/fact-check-lookup`.
///
/// An empty `facts` list is a valid outcome, distinct from a failed
/// request: it means the search ran and found nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactLookup {
    #[serde(default)]
    pub facts: Vec<Fact>,
}
