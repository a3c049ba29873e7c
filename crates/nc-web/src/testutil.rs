//! Shared helpers for handler tests: a canned-response backend that
//! counts calls, and one-shot request drivers for the router.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use nc_backend::CredibilityBackend;
use nc_core::article::AnalysisResult;
use nc_core::bias::BiasResult;
use nc_core::factcheck::FactLookup;
use nc_core::media::{MediaResult, MediaUpload};
use nc_core::{NcError, NcResult};

use crate::state::AppState;

/// Backend double: replays a canned JSON payload (or a status failure)
/// and counts how many calls actually reached it.
#[derive(Default)]
pub(crate) struct MockBackend {
    calls: AtomicUsize,
    response: Mutex<Option<serde_json::Value>>,
    status_error: Option<u16>,
}

impl MockBackend {
    pub fn with_json(value: serde_json::Value) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Mutex::new(Some(value)),
            status_error: None,
        }
    }

    pub fn with_status(status: u16) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: Mutex::new(None),
            status_error: Some(status),
        }
    }

    /// Number of calls that reached the backend.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond<T: serde::de::DeserializeOwned>(&self) -> NcResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.status_error {
            return Err(NcError::BackendStatus { status });
        }

        let value = self
            .response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| serde_json::json!({}));
        serde_json::from_value(value).map_err(|e| NcError::Decode(e.to_string()))
    }
}

#[async_trait]
impl CredibilityBackend for MockBackend {
    async fn analyze_article(&self, _url: &str) -> NcResult<AnalysisResult> {
        self.respond()
    }

    async fn check_bias(&self, _text: &str) -> NcResult<BiasResult> {
        self.respond()
    }

    async fn lookup_fact_checks(&self, _query: &str) -> NcResult<FactLookup> {
        self.respond()
    }

    async fn verify_media(&self, _upload: MediaUpload) -> NcResult<MediaResult> {
        self.respond()
    }
}

/// Build a router over the mock, keeping a handle to it for assertions.
pub(crate) fn test_router(backend: MockBackend) -> (Router, Arc<MockBackend>) {
    let backend = Arc::new(backend);
    let state = AppState::new(backend.clone());
    (crate::create_router(state), backend)
}

async fn run(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// POST a urlencoded form and return (status, body).
pub(crate) async fn post_form(router: Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    run(router, request).await
}

/// GET a path and return (status, body).
pub(crate) async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    run(router, request).await
}

/// POST a single-file multipart form the way the media page submits it.
pub(crate) async fn post_multipart_file(
    router: Router,
    uri: &str,
    file_name: &str,
    bytes: &[u8],
) -> (StatusCode, String) {
    let boundary = "nc-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
             filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    run(router, request).await
}
