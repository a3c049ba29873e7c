//! NewsCredible Web Server
//!
//! Axum-based server for the four credibility tools. Full pages are
//! served on GET; submissions arrive as HTMX requests and receive HTML
//! fragments (result cards, or an out-of-band toast on failure).

pub mod routes;
pub mod state;

#[cfg(test)]
pub(crate) mod testutil;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use nc_backend::CredibilityBackend;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(routes::pages::home))
        .route("/article-analyzer", get(routes::pages::article_analyzer))
        .route("/bias-checker", get(routes::pages::bias_checker))
        .route("/media-verifier", get(routes::pages::media_verifier))
        .route("/fact-check-lookup", get(routes::pages::fact_check_lookup))
        // Tool submissions (HTMX fragments)
        .route("/tools/analyze-article", post(routes::article::analyze))
        .route("/tools/bias-check", post(routes::bias::check))
        .route("/tools/fact-check-lookup", get(routes::factcheck::lookup))
        .route("/tools/media-verify", post(routes::media::verify))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    backend: Arc<dyn CredibilityBackend>,
    host: &str,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState::new(backend);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
