use axum::{serve, Router};
use anyhow::Result;
use tokio::net::TcpListener;

use deploy_verify::config::state::AppState;
use deploy_verify::core::{logging, server};

#[tokio::main]
async fn main() -> Result<()> {
    // set up logging
    logging::init_tracing();

    // Load configuration up front so a bad deploy fails here, not mid-request
    let state: &'static AppState = AppState::instance();
    tracing::info!(
        "Serving the deployment verification page for the '{}' environment",
        state.environment.environment
    );

    let listener: TcpListener = server::setup_listener().await?;
    println!("Server listening on: {}", listener.local_addr()?);

    let app: Router = server::create_app();

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}
