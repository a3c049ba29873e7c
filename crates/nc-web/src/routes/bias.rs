//! Bias checker route handlers.

use askama::Template;
use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use nc_core::bias::{self, BiasResult};
use nc_core::render;

use crate::routes::respond::{self, RenderedResult, Tool};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "partials/bias_result.html")]
struct BiasResultTemplate {
    result: BiasResultView,
}

struct BiasResultView {
    label: String,
    confidence_pct: String,
    explanation: Option<String>,
}

impl BiasResultView {
    fn from_result(result: &BiasResult) -> Self {
        Self {
            label: result.label.clone(),
            confidence_pct: render::confidence_percent(result.confidence),
            explanation: result.explanation.clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct BiasCheckForm {
    #[serde(default)]
    pub text: String,
}

/// POST /tools/bias-check - Run the bias analysis on free text.
pub async fn check(
    State(state): State<AppState>,
    Form(form): Form<BiasCheckForm>,
) -> Html<String> {
    let backend = state.backend.clone();

    respond::submit(
        Tool::Bias,
        bias::validate_text(&form.text).map(|text| {
            let text = text.to_string();
            async move { backend.check_bias(&text).await }
        }),
        |result| {
            let template = BiasResultTemplate {
                result: BiasResultView::from_result(&result),
            };
            Ok(RenderedResult::cards(respond::render_template(&template)?))
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use crate::testutil::{post_form, test_router, MockBackend};
    use serde_json::json;

    #[tokio::test]
    async fn empty_text_is_rejected_without_a_backend_call() {
        let (router, backend) = test_router(MockBackend::default());

        let (_, body) = post_form(router, "/tools/bias-check", "text=%20%20").await;

        assert_eq!(backend.calls(), 0);
        assert!(body.contains("Enter some text to check for bias."));
    }

    #[tokio::test]
    async fn result_renders_label_and_one_decimal_confidence() {
        let backend = MockBackend::with_json(json!({
            "label": "right",
            "confidence": 0.905,
            "explanation": "emotive framing"
        }));
        let (router, backend) = test_router(backend);

        let (_, body) = post_form(router, "/tools/bias-check", "text=some+headline").await;

        assert_eq!(backend.calls(), 1);
        assert!(body.contains("Detected Bias:"));
        assert!(body.contains(">right</span>"));
        assert!(body.contains("90.5%"));
        assert!(body.contains("emotive framing"));
    }

    #[tokio::test]
    async fn empty_payload_falls_back_to_unknown_with_zero_confidence() {
        let (router, _) = test_router(MockBackend::with_json(json!({})));

        let (_, body) = post_form(router, "/tools/bias-check", "text=anything").await;

        assert!(body.contains(">Unknown</span>"));
        assert!(body.contains("0.0%"));
        assert!(!body.contains("Explanation:"));
    }

    #[tokio::test]
    async fn backend_failure_produces_the_generic_error_toast() {
        let (router, _) = test_router(MockBackend::with_status(503));

        let (_, body) = post_form(router, "/tools/bias-check", "text=anything").await;

        assert!(body.contains(">Error</div>"));
        assert!(body.contains("Failed to check bias"));
    }
}
