//! HTTP implementation of the backend trait.
//!
//! One reqwest call per operation. Non-2xx statuses and transport
//! failures map onto the two request-error shapes the UI knows how to
//! toast; response bodies that fail to decode are their own error so
//! the message can carry the parser's complaint.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use nc_core::article::AnalysisResult;
use nc_core::bias::BiasResult;
use nc_core::config::Config;
use nc_core::factcheck::FactLookup;
use nc_core::media::{MediaResult, MediaUpload};
use nc_core::{NcError, NcResult};

use crate::CredibilityBackend;

/// Endpoint paths on the analysis backend.
pub const ANALYZE_ARTICLE_PATH: &str = "/api/analyze-article";
pub const BIAS_CHECK_PATH: &str = "/api/bias-check";
pub const FACT_CHECK_LOOKUP_PATH: &str = "/api/fact-check-lookup";
pub const MEDIA_VERIFY_PATH: &str = "/api/media-verify";

/// HTTP client for the analysis backend.
#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct BiasCheckRequest<'a> {
    text: &'a str,
}

impl HttpBackend {
    /// Create a client against `base_url` with the given request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client from the application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.backend_url, config.request_timeout())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> NcResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(NcError::BackendStatus {
                status: status.as_u16(),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| NcError::Decode(e.to_string()))
    }
}

fn transport(err: reqwest::Error) -> NcError {
    NcError::Transport(err.to_string())
}

#[async_trait]
impl CredibilityBackend for HttpBackend {
    async fn analyze_article(&self, url: &str) -> NcResult<AnalysisResult> {
        let endpoint = self.endpoint(ANALYZE_ARTICLE_PATH);
        debug!(%endpoint, article_url = %url, "Dispatching article analysis");

        let response = self
            .client
            .post(&endpoint)
            .json(&AnalyzeRequest { url })
            .send()
            .await
            .map_err(transport)?;

        Self::decode(response).await
    }

    async fn check_bias(&self, text: &str) -> NcResult<BiasResult> {
        let endpoint = self.endpoint(BIAS_CHECK_PATH);
        debug!(%endpoint, chars = text.len(), "Dispatching bias check");

        let response = self
            .client
            .post(&endpoint)
            .json(&BiasCheckRequest { text })
            .send()
            .await
            .map_err(transport)?;

        Self::decode(response).await
    }

    async fn lookup_fact_checks(&self, query: &str) -> NcResult<FactLookup> {
        let endpoint = self.endpoint(FACT_CHECK_LOOKUP_PATH);
        debug!(%endpoint, %query, "Dispatching fact-check lookup");

        let response = self
            .client
            .get(&endpoint)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(transport)?;

        Self::decode(response).await
    }

    async fn verify_media(&self, upload: MediaUpload) -> NcResult<MediaResult> {
        let endpoint = self.endpoint(MEDIA_VERIFY_PATH);
        debug!(
            %endpoint,
            file = %upload.file_name,
            bytes = upload.bytes.len(),
            "Dispatching media verification"
        );

        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|_| {
                NcError::validation(format!(
                    "Unrecognized media content type: {}",
                    upload.content_type
                ))
            })?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        Self::decode(response).await
    }
}
