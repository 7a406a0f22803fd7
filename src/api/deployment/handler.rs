// Handler for the deployment verification page

use axum::{extract::State, response::Html};
use std::backtrace::Backtrace;
use tracing::{instrument, info};

use crate::config::state::AppState;
use crate::utils::clock;
use super::page;

/// Renders the verification page: always 200, always a complete document.
#[instrument(fields(backtrace = ?Backtrace::capture()), skip(state))]
pub async fn deployment_page_handler(
    State(state): State<AppState>,
) -> Html<String> {
    let label: String = state.environment.environment.to_uppercase();
    let timestamp: String = clock::current_timestamp();

    info!("Rendering verification page for '{}' at {}", label, timestamp);

    Html(page::render_page(&label, &timestamp))
}
