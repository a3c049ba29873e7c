//! Media verification models.

use serde::{Deserialize, Serialize};

/// Authenticity assessment of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaVerdict {
    Genuine,
    Forged,
    Deepfake,
    Repurposed,
    #[serde(other)]
    Unknown,
}

impl Default for MediaVerdict {
    fn default() -> Self {
        Self::Unknown
    }
}

impl MediaVerdict {
    /// Wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Genuine => "genuine",
            Self::Forged => "forged",
            Self::Deepfake => "deepfake",
            Self::Repurposed => "repurposed",
            Self::Unknown => "unknown",
        }
    }

    /// Capitalized display form.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Genuine => "Genuine",
            Self::Forged => "Forged",
            Self::Deepfake => "Deepfake",
            Self::Repurposed => "Repurposed",
            Self::Unknown => "Unknown",
        }
    }
}

/// Response of `/api/media-verify`.
///
/// `evidenceUrls` is camelCase on the wire; an absent or empty list
/// hides the evidence section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaResult {
    #[serde(default)]
    pub verdict: MediaVerdict,
    pub details: Option<String>,
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub evidence_urls: Vec<String>,
}

/// A file captured from the upload form, ready for dispatch.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_verdict_payload() {
        let result: MediaResult = serde_json::from_str(r#"{"verdict":"deepfake"}"#).unwrap();
        assert_eq!(result.verdict, MediaVerdict::Deepfake);
        assert_eq!(result.details, None);
        assert_eq!(result.metadata, None);
        assert!(result.evidence_urls.is_empty());
    }

    #[test]
    fn missing_verdict_defaults_to_unknown() {
        let result: MediaResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.verdict, MediaVerdict::Unknown);
    }

    #[test]
    fn unrecognized_verdict_reads_as_unknown() {
        let result: MediaResult =
            serde_json::from_str(r#"{"verdict":"synthetic"}"#).unwrap();
        assert_eq!(result.verdict, MediaVerdict::Unknown);
    }

    #[test]
    fn evidence_urls_use_camel_case() {
        let raw = r#"{"verdict":"repurposed","evidenceUrls":["https://a.example/1"]}"#;
        let result: MediaResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.evidence_urls, vec!["https://a.example/1".to_string()]);

        let back = serde_json::to_value(&result).unwrap();
        assert!(back.get("evidenceUrls").is_some());
    }

    #[test]
    fn verdict_display_is_capitalized() {
        assert_eq!(MediaVerdict::Deepfake.display(), "Deepfake");
        assert_eq!(MediaVerdict::Unknown.display(), "Unknown");
    }
}
