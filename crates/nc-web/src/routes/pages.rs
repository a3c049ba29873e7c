//! Full-page route handlers.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Template)]
#[template(path = "home.html")]
struct HomePage;

#[derive(Template)]
#[template(path = "article.html")]
struct ArticleAnalyzerPage;

#[derive(Template)]
#[template(path = "bias.html")]
struct BiasCheckerPage;

#[derive(Template)]
#[template(path = "media.html")]
struct MediaVerifierPage;

#[derive(Template)]
#[template(path = "factcheck.html")]
struct FactCheckLookupPage;

fn render_page<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(format!("Template error: {}", e)),
        )
            .into_response(),
    }
}

/// GET / - Landing page with the feature cards.
pub async fn home() -> Response {
    render_page(HomePage)
}

/// GET /article-analyzer
pub async fn article_analyzer() -> Response {
    render_page(ArticleAnalyzerPage)
}

/// GET /bias-checker
pub async fn bias_checker() -> Response {
    render_page(BiasCheckerPage)
}

/// GET /media-verifier
pub async fn media_verifier() -> Response {
    render_page(MediaVerifierPage)
}

/// GET /fact-check-lookup
pub async fn fact_check_lookup() -> Response {
    render_page(FactCheckLookupPage)
}
