/*
    * Middleware that times each request and logs the final status line.
    * The response body passes through untouched: the page contract is
    * text/html, so nothing here may rewrite it.
*/

use std::{convert::Infallible, time::Instant};

use axum::{
    body::Body,
    http::{Method, Request, Response, StatusCode},
    middleware::Next,
};
use tracing::info;

pub async fn response_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let start: Instant = Instant::now();
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_string();

    // Call the inner handler
    let response: Response<Body> = next.run(req).await;

    // Build a reason string from the status (e.g. "OK", "NOT_FOUND")
    let status: StatusCode = response.status();
    let reason: String = status
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_");

    info!(
        "{} {} responded {} {} in {} ms",
        method,
        path,
        status.as_u16(),
        reason,
        start.elapsed().as_millis()
    );

    Ok(response)
}
