//! Bias check response model.

use serde::{Deserialize, Serialize};

/// Response of `/api/bias-check`.
///
/// The backend contract is loose: a missing label reads as "Unknown"
/// and a missing confidence as zero, matching what the tool displays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasResult {
    #[serde(default = "default_label")]
    pub label: String,
    /// Confidence in [0, 1].
    #[serde(default)]
    pub confidence: f64,
    pub explanation: Option<String>,
}

fn default_label() -> String {
    "Unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let result: BiasResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.label, "Unknown");
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.explanation, None);
    }

    #[test]
    fn full_payload_round_trips() {
        let raw = r#"{"label":"left","confidence":0.82,"explanation":"loaded wording"}"#;
        let result: BiasResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.label, "left");
        assert_eq!(result.confidence, 0.82);
        assert_eq!(result.explanation.as_deref(), Some("loaded wording"));
    }
}
