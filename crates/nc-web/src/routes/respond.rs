//! The shared submission lifecycle: validate → dispatch → render-or-notify.
//!
//! Every tool runs through [`submit`]. Validation failures never reach
//! the backend; request failures become a toast. Fragments return 200
//! because HTMX does not swap non-2xx responses; the error still lands
//! in the log.

use std::future::Future;

use askama::Template;
use axum::response::Html;
use tracing::{debug, warn};
use uuid::Uuid;

use nc_core::{NcError, NcResult};

/// Which tool a submission belongs to. Selects notification wording,
/// which intentionally differs per tool (the texts are part of the UI).
#[derive(Debug, Clone, Copy)]
pub(crate) enum Tool {
    Article,
    Bias,
    FactCheck,
    Media,
}

impl Tool {
    fn name(&self) -> &'static str {
        match self {
            Self::Article => "article-analyzer",
            Self::Bias => "bias-checker",
            Self::FactCheck => "fact-check-lookup",
            Self::Media => "media-verifier",
        }
    }

    fn validation_title(&self) -> &'static str {
        match self {
            Self::Article => "Invalid URL",
            _ => "Error",
        }
    }

    fn failure_title(&self) -> &'static str {
        match self {
            Self::Article => "Analysis Error",
            _ => "Error",
        }
    }

    /// Description for a non-2xx backend status. Only the article tool
    /// reports the numeric status.
    fn status_description(&self, status: u16) -> String {
        match self {
            Self::Article => format!("Analysis failed: {status}"),
            Self::Bias => "Failed to check bias".to_string(),
            Self::FactCheck => "Search failed".to_string(),
            Self::Media => "Verification failed".to_string(),
        }
    }

    fn fallback_description(&self) -> &'static str {
        match self {
            Self::Article => "Failed to analyze article",
            _ => "API error",
        }
    }
}

/// A transient notification. Later toasts replace the visible one.
pub(crate) struct Toast {
    pub title: String,
    pub description: String,
}

#[derive(Template)]
#[template(path = "partials/toast.html")]
struct ToastTemplate {
    title: String,
    description: String,
}

/// Toast for a search that ran but matched nothing.
pub(crate) fn no_results_toast() -> Toast {
    Toast {
        title: "No results found".to_string(),
        description: "No matching fact-checks found for this query.".to_string(),
    }
}

/// What a successful render produced: card HTML for the result slot,
/// plus an optional toast (e.g. the empty-results notice).
pub(crate) struct RenderedResult {
    pub html: String,
    pub toast: Option<Toast>,
}

impl RenderedResult {
    pub fn cards(html: String) -> Self {
        Self { html, toast: None }
    }

    pub fn empty_with(toast: Toast) -> Self {
        Self {
            html: String::new(),
            toast: Some(toast),
        }
    }
}

/// Render a template into a fragment string.
pub(crate) fn render_template<T: Template>(template: &T) -> NcResult<String> {
    template
        .render()
        .map_err(|e| NcError::Template(e.to_string()))
}

/// Run one submission through the shared lifecycle.
///
/// `input` is the validation outcome: `Ok` carries the dispatch future
/// (built only after validation passed, so a rejected submission makes
/// no backend call), `Err` is the validation error. `render` maps the
/// decoded response to result cards.
pub(crate) async fn submit<T, F, R>(tool: Tool, input: NcResult<F>, render: R) -> Html<String>
where
    F: Future<Output = NcResult<T>>,
    R: FnOnce(T) -> NcResult<RenderedResult>,
{
    let submission = Uuid::new_v4();

    let dispatch = match input {
        Ok(dispatch) => dispatch,
        Err(err) => {
            debug!(tool = tool.name(), %submission, %err, "Submission rejected before dispatch");
            return fragment("", Some(toast_for(tool, &err)));
        }
    };

    match dispatch.await {
        Ok(value) => match render(value) {
            Ok(rendered) => {
                debug!(tool = tool.name(), %submission, "Submission rendered");
                fragment(&rendered.html, rendered.toast)
            }
            Err(err) => {
                warn!(tool = tool.name(), %submission, %err, "Result failed to render");
                fragment("", Some(toast_for(tool, &err)))
            }
        },
        Err(err) => {
            warn!(tool = tool.name(), %submission, %err, "Backend dispatch failed");
            fragment("", Some(toast_for(tool, &err)))
        }
    }
}

fn toast_for(tool: Tool, err: &NcError) -> Toast {
    let (title, description) = match err {
        NcError::Validation(msg) => (tool.validation_title(), msg.clone()),
        NcError::BackendStatus { status } => {
            (tool.failure_title(), tool.status_description(*status))
        }
        NcError::Transport(msg) | NcError::Decode(msg) if !msg.is_empty() => {
            (tool.failure_title(), msg.clone())
        }
        _ => (tool.failure_title(), tool.fallback_description().to_string()),
    };

    Toast {
        title: title.to_string(),
        description,
    }
}

/// Assemble a fragment: result HTML for the target slot, plus an
/// out-of-band swap of the toast region when there is something to
/// announce.
fn fragment(result_html: &str, toast: Option<Toast>) -> Html<String> {
    let mut html = result_html.to_string();
    if let Some(toast) = toast {
        let template = ToastTemplate {
            title: toast.title,
            description: toast.description,
        };
        match template.render() {
            Ok(rendered) => html.push_str(&rendered),
            Err(e) => warn!(error = %e, "Toast template failed to render"),
        }
    }
    Html(html)
}
