//! NewsCredible Backend Client
//!
//! Talks to the external analysis backend over HTTP. The backend itself
//! is not part of this repository; the four endpoints here are the only
//! contract. [`CredibilityBackend`] is the seam the web and CLI layers
//! program against, with [`HttpBackend`] as the one real implementation.

pub mod client;

pub use client::HttpBackend;

use async_trait::async_trait;

use nc_core::article::AnalysisResult;
use nc_core::bias::BiasResult;
use nc_core::factcheck::FactLookup;
use nc_core::media::{MediaResult, MediaUpload};
use nc_core::NcResult;

/// The four backend operations, one per tool.
///
/// Each call is exactly one HTTP round-trip; callers never retry.
#[async_trait]
pub trait CredibilityBackend: Send + Sync {
    /// POST `/api/analyze-article` with `{"url": ...}`.
    async fn analyze_article(&self, url: &str) -> NcResult<AnalysisResult>;

    /// POST `/api/bias-check` with `{"text": ...}`.
    async fn check_bias(&self, text: &str) -> NcResult<BiasResult>;

    /// GET `/api/fact-check-lookup?q=...`.
    async fn lookup_fact_checks(&self, query: &str) -> NcResult<FactLookup>;

    /// POST `/api/media-verify` with a multipart `file` field.
    async fn verify_media(&self, upload: MediaUpload) -> NcResult<MediaResult>;
}
