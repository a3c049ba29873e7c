//! Fact-check lookup route handlers.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use nc_core::factcheck::{self, Fact};

use crate::routes::respond::{self, RenderedResult, Tool};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "partials/fact_results.html")]
struct FactResultsTemplate {
    facts: Vec<FactCardView>,
}

struct FactCardView {
    title: String,
    source: String,
    url: String,
    verdict: String,
    summary: String,
}

impl FactCardView {
    fn from_fact(fact: &Fact) -> Self {
        Self {
            title: fact.title.clone(),
            source: fact.source.clone(),
            url: fact.url.clone(),
            verdict: fact.verdict.clone(),
            summary: fact.summary.clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct LookupParams {
    #[serde(default)]
    pub q: String,
}

/// GET /tools/fact-check-lookup - Search published fact-checks.
///
/// An empty `facts` list is not an error; it renders zero cards and
/// the "no results" notice.
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Html<String> {
    let backend = state.backend.clone();

    respond::submit(
        Tool::FactCheck,
        factcheck::validate_query(&params.q).map(|query| {
            let query = query.to_string();
            async move { backend.lookup_fact_checks(&query).await }
        }),
        |lookup| {
            if lookup.facts.is_empty() {
                return Ok(RenderedResult::empty_with(respond::no_results_toast()));
            }
            let template = FactResultsTemplate {
                facts: lookup.facts.iter().map(FactCardView::from_fact).collect(),
            };
            Ok(RenderedResult::cards(respond::render_template(&template)?))
        },
    )
    .await
}
