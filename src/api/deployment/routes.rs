// Deployment page route definitions

use axum::{
    routing::get,
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router for the verification page
pub fn deployment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::deployment_page_handler))
}
