//! Display mapping for result cards.
//!
//! Pure functions from response values to the strings and style classes
//! the cards use. All tools share these so precision and thresholds are
//! chosen in exactly one place.

use crate::media::MediaVerdict;

/// Scores at or above this are high-tier (green).
pub const TIER_HIGH: f64 = 0.8;

/// Scores at or above this (but below [`TIER_HIGH`]) are mid-tier (yellow).
pub const TIER_MID: f64 = 0.6;

/// Separate cutoff for the credibility check/alert icon.
///
/// Deliberately not the same as the color tiers; the icon flips at 0.7
/// while the color flips at 0.6/0.8.
pub const CREDIBILITY_ICON_CUTOFF: f64 = 0.7;

/// Confidence values render as a percentage with one decimal.
pub fn confidence_percent(value: f64) -> String {
    format!("{:.1}", value * 100.0)
}

/// Score values render as a whole-number percentage.
pub fn score_percent(value: f64) -> String {
    format!("{:.0}", value * 100.0)
}

/// Sentiment scores render with two decimals, unscaled.
pub fn sentiment_value(value: f64) -> String {
    format!("{value:.2}")
}

/// Color tier for credibility and factuality scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Mid,
    Low,
}

impl ScoreTier {
    pub fn for_score(score: f64) -> Self {
        if score >= TIER_HIGH {
            Self::High
        } else if score >= TIER_MID {
            Self::Mid
        } else {
            Self::Low
        }
    }

    /// CSS class on the rendered percentage.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::High => "score-high",
            Self::Mid => "score-mid",
            Self::Low => "score-low",
        }
    }
}

/// Whether the credibility card shows the check icon (vs the alert icon).
pub fn credibility_icon_ok(score: f64) -> bool {
    score >= CREDIBILITY_ICON_CUTOFF
}

/// Badge class for a bias label. Unrecognized labels get the warning badge.
pub fn bias_badge_class(label: &str) -> &'static str {
    match label.to_lowercase().as_str() {
        "left" => "badge-left",
        "right" => "badge-right",
        "center" => "badge-center",
        "neutral" => "badge-neutral",
        _ => "badge-other",
    }
}

/// Direction indicator for a sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentIndicator {
    Up,
    Down,
    Flat,
}

impl SentimentIndicator {
    pub fn for_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positive" => Self::Up,
            "negative" => Self::Down,
            _ => Self::Flat,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "●",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Up => "sentiment-positive",
            Self::Down => "sentiment-negative",
            Self::Flat => "sentiment-neutral",
        }
    }
}

/// Badge text for a media verdict.
pub fn verdict_display(verdict: MediaVerdict) -> &'static str {
    verdict.display()
}
