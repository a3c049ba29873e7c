//! Article analysis response models.
//!
//! Shape of the `/api/analyze-article` response. Every section is
//! optional; a card renders only when its section is present.

use serde::{Deserialize, Serialize};

/// Full analysis of a single article URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub url: String,
    pub title: Option<String>,
    pub bias: Option<BiasAssessment>,
    pub credibility: Option<CredibilityAssessment>,
    pub sentiment: Option<SentimentAssessment>,
    pub factuality: Option<FactualityAssessment>,
    pub summary: Option<String>,
}

/// Political/rhetorical leaning of the article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasAssessment {
    pub label: String,
    /// Confidence in [0, 1].
    pub confidence: f64,
    pub explanation: Option<String>,
}

/// Source/article trustworthiness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredibilityAssessment {
    /// Score in [0, 1].
    pub score: f64,
    #[serde(default)]
    pub factors: Vec<String>,
}

/// Overall tone of the article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentAssessment {
    pub label: String,
    pub score: f64,
}

/// Verified-claim accuracy within the text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactualityAssessment {
    /// Score in [0, 1].
    pub score: f64,
    #[serde(default)]
    pub claims_verified: i64,
    #[serde(default)]
    pub issues_found: Vec<String>,
}
