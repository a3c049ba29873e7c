//! Media verifier route handlers.

use askama::Template;
use axum::{
    extract::{Multipart, State},
    response::Html,
};

use nc_core::media::{self, MediaResult, MediaUpload};
use nc_core::{NcError, NcResult};

use crate::routes::respond::{self, RenderedResult, Tool};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "partials/media_result.html")]
struct MediaResultTemplate {
    result: MediaResultView,
}

struct MediaResultView {
    verdict: &'static str,
    details: Option<String>,
    metadata_json: Option<String>,
    evidence_urls: Vec<String>,
}

impl MediaResultView {
    fn from_result(result: &MediaResult) -> Self {
        Self {
            verdict: result.verdict.display(),
            details: result.details.clone(),
            metadata_json: result
                .metadata
                .as_ref()
                .and_then(|map| serde_json::to_string_pretty(map).ok()),
            evidence_urls: result.evidence_urls.clone(),
        }
    }
}

/// Pull the `file` part out of the multipart form.
async fn read_upload(multipart: &mut Multipart) -> NcResult<MediaUpload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| NcError::validation(e.to_string()))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| NcError::validation(e.to_string()))?;

            return Ok(MediaUpload {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            });
        }
    }

    Err(NcError::validation(media::MISSING_FILE_MESSAGE))
}

/// POST /tools/media-verify - Forward the uploaded file for verification.
pub async fn verify(State(state): State<AppState>, mut multipart: Multipart) -> Html<String> {
    let backend = state.backend.clone();

    let upload = read_upload(&mut multipart).await.and_then(|upload| {
        media::validate_upload(&upload)?;
        Ok(upload)
    });

    respond::submit(
        Tool::Media,
        upload.map(|upload| async move { backend.verify_media(upload).await }),
        |result| {
            let template = MediaResultTemplate {
                result: MediaResultView::from_result(&result),
            };
            Ok(RenderedResult::cards(respond::render_template(&template)?))
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use crate::testutil::{post_multipart_file, test_router, MockBackend};
    use serde_json::json;

    #[tokio::test]
    async fn missing_file_is_rejected_without_a_backend_call() {
        let (router, backend) = test_router(MockBackend::default());

        let (_, body) = post_multipart_file(router, "/tools/media-verify", "", b"").await;

        assert_eq!(backend.calls(), 0);
        assert!(body.contains("Select an image or video to verify."));
    }

    #[tokio::test]
    async fn bare_verdict_renders_only_the_result_line() {
        let backend = MockBackend::with_json(json!({ "verdict": "deepfake" }));
        let (router, backend) = test_router(backend);

        let (_, body) =
            post_multipart_file(router, "/tools/media-verify", "clip.mp4", b"FAKEVIDEO").await;

        assert_eq!(backend.calls(), 1);
        assert!(body.contains("Deepfake"));
        assert!(!body.contains("Details:"));
        assert!(!body.contains("Metadata:"));
        assert!(!body.contains("Evidence:"));
    }

    #[tokio::test]
    async fn full_result_renders_details_metadata_and_evidence() {
        let backend = MockBackend::with_json(json!({
            "verdict": "repurposed",
            "details": "Frame matches 2019 footage.",
            "metadata": { "codec": "h264", "duration": 12.5 },
            "evidenceUrls": ["https://archive.example/original"]
        }));
        let (router, _) = test_router(backend);

        let (_, body) =
            post_multipart_file(router, "/tools/media-verify", "clip.mp4", b"FAKEVIDEO").await;

        assert!(body.contains("Repurposed"));
        assert!(body.contains("Frame matches 2019 footage."));
        assert!(body.contains("h264"));
        assert!(body.contains("https://archive.example/original"));
    }

    #[tokio::test]
    async fn backend_failure_produces_the_verification_failed_toast() {
        let (router, _) = test_router(MockBackend::with_status(500));

        let (_, body) =
            post_multipart_file(router, "/tools/media-verify", "photo.png", b"PNGDATA").await;

        assert!(body.contains("Verification failed"));
    }
}
