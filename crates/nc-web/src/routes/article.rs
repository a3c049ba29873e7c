//! Article analyzer route handlers.

use askama::Template;
use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use nc_core::article::{self, AnalysisResult};
use nc_core::render::{self, ScoreTier, SentimentIndicator};

use crate::routes::respond::{self, RenderedResult, Tool};
use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "partials/article_result.html")]
struct ArticleResultTemplate {
    result: ArticleResultView,
}

/// View model for the full analysis; each `Option` is one card.
struct ArticleResultView {
    url: String,
    title: Option<String>,
    bias: Option<BiasCardView>,
    credibility: Option<CredibilityCardView>,
    sentiment: Option<SentimentCardView>,
    factuality: Option<FactualityCardView>,
    summary: Option<String>,
}

struct BiasCardView {
    label: String,
    badge_class: &'static str,
    confidence_pct: String,
    explanation: Option<String>,
}

struct CredibilityCardView {
    percent: String,
    tier_class: &'static str,
    icon_ok: bool,
    factors: Vec<String>,
}

struct SentimentCardView {
    label: String,
    value: String,
    symbol: &'static str,
    css_class: &'static str,
}

struct FactualityCardView {
    percent: String,
    tier_class: &'static str,
    claims_verified: i64,
    issues: Vec<String>,
}

impl ArticleResultView {
    fn from_result(result: &AnalysisResult) -> Self {
        Self {
            url: result.url.clone(),
            title: result.title.clone(),
            bias: result.bias.as_ref().map(|bias| BiasCardView {
                label: bias.label.clone(),
                badge_class: render::bias_badge_class(&bias.label),
                confidence_pct: render::confidence_percent(bias.confidence),
                explanation: bias.explanation.clone(),
            }),
            credibility: result.credibility.as_ref().map(|cred| CredibilityCardView {
                percent: render::score_percent(cred.score),
                tier_class: ScoreTier::for_score(cred.score).css_class(),
                icon_ok: render::credibility_icon_ok(cred.score),
                factors: cred.factors.clone(),
            }),
            sentiment: result.sentiment.as_ref().map(|sentiment| {
                let indicator = SentimentIndicator::for_label(&sentiment.label);
                SentimentCardView {
                    label: sentiment.label.clone(),
                    value: render::sentiment_value(sentiment.score),
                    symbol: indicator.symbol(),
                    css_class: indicator.css_class(),
                }
            }),
            factuality: result.factuality.as_ref().map(|fact| FactualityCardView {
                percent: render::score_percent(fact.score),
                tier_class: ScoreTier::for_score(fact.score).css_class(),
                claims_verified: fact.claims_verified,
                issues: fact.issues_found.clone(),
            }),
            summary: result.summary.clone(),
        }
    }
}

// ============================================================
// HANDLERS
// ============================================================

#[derive(Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub url: String,
}

/// POST /tools/analyze-article - Validate the URL, run the analysis,
/// return the result cards fragment.
pub async fn analyze(
    State(state): State<AppState>,
    Form(form): Form<AnalyzeForm>,
) -> Html<String> {
    let backend = state.backend.clone();

    respond::submit(
        Tool::Article,
        article::validate_url(&form.url)
            .map(|url| async move { backend.analyze_article(url.as_str()).await }),
        |result| {
            let template = ArticleResultTemplate {
                result: ArticleResultView::from_result(&result),
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
    async fn invalid_url_is_rejected_without_a_backend_call() {
        let (router, backend) = test_router(MockBackend::default());

        let (status, body) = post_form(router, "/tools/analyze-article", "url=not%20a%20url").await;

        assert_eq!(status, 200);
        assert_eq!(backend.calls(), 0);
        assert!(body.contains("Invalid URL"));
        assert!(body.contains("Please enter a valid URL starting with http:// or https://"));
    }

    #[tokio::test]
    async fn bias_only_response_renders_a_single_card() {
        let backend = MockBackend::with_json(json!({
            "url": "https://example.com/a",
            "bias": { "label": "left", "confidence": 0.82 }
        }));
        let (router, backend) = test_router(backend);

        let (status, body) = post_form(
            router,
            "/tools/analyze-article",
            "url=https%3A%2F%2Fexample.com%2Fa",
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(backend.calls(), 1);
        assert!(body.contains("Political Bias"));
        assert!(body.contains(">left</span>"));
        assert!(body.contains("82.0% confidence"));
        // No other analysis cards for absent sections.
        assert!(!body.contains("Credibility"));
        assert!(!body.contains("Sentiment"));
        assert!(!body.contains("Factuality"));
        assert!(!body.contains("Analysis Summary"));
        // No toast on success.
        assert!(!body.contains("toast-region"));
    }

    #[tokio::test]
    async fn full_response_renders_every_card() {
        let backend = MockBackend::with_json(json!({
            "url": "https://example.com/a",
            "title": "Headline",
            "bias": { "label": "center", "confidence": 0.5, "explanation": "balanced wording" },
            "credibility": { "score": 0.65, "factors": ["cites primary sources"] },
            "sentiment": { "label": "negative", "score": -0.25 },
            "factuality": { "score": 0.9, "claims_verified": 7, "issues_found": ["one outdated figure"] },
            "summary": "Overall a reasonable piece."
        }));
        let (router, backend) = test_router(backend);

        let (_, body) = post_form(
            router,
            "/tools/analyze-article",
            "url=https%3A%2F%2Fexample.com%2Fa",
        )
        .await;

        assert_eq!(backend.calls(), 1);
        assert!(body.contains("Headline"));
        assert!(body.contains("badge-center"));
        assert!(body.contains("50.0% confidence"));
        // 0.65: mid-tier color but below the 0.7 icon cutoff.
        assert!(body.contains("score-mid"));
        assert!(body.contains("icon-alert"));
        assert!(body.contains("65%"));
        assert!(body.contains("cites primary sources"));
        assert!(body.contains("sentiment-negative"));
        assert!(body.contains("-0.25"));
        assert!(body.contains("score-high"));
        assert!(body.contains("90%"));
        assert!(body.contains("7 claims verified"));
        assert!(body.contains("one outdated figure"));
        assert!(body.contains("Overall a reasonable piece."));
    }

    #[tokio::test]
    async fn backend_failure_produces_the_analysis_error_toast() {
        let (router, backend) = test_router(MockBackend::with_status(500));

        let (status, body) = post_form(
            router,
            "/tools/analyze-article",
            "url=https%3A%2F%2Fexample.com%2Fa",
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(backend.calls(), 1);
        assert!(body.contains("Analysis Error"));
        assert!(body.contains("Analysis failed: 500"));
        assert!(!body.contains("Political Bias"));
    }
}
