// Fallback handler for routes the service does not serve

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub async fn fallback_handler() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": "NOT_FOUND",
            "code": StatusCode::NOT_FOUND.as_u16(),
            "errors": ["The requested route does not exist"],
        })),
    )
        .into_response()
}
