use axum::{
    http::StatusCode,
    response::Json,
    routing::{delete, get, patch, post},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::info;

mod config;
mod error;
mod handlers;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    flightline_core::logging::init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new(config.clone())?);

    let app = Router::new()
        .route("/health", get(health_check))
        .route(
            "/flights",
            post(handlers::add_flight).get(handlers::list_flights),
        )
        .route("/flights/total", get(handlers::total_flights))
        .route("/flights/next", get(handlers::next_flight))
        .route("/flights/last", get(handlers::last_flight))
        .route("/flights/insert", post(handlers::insert_flight))
        .route("/flights/extract", delete(handlers::extract_flight))
        .route("/flights/reorder", patch(handlers::reorder_flights))
        .with_state(state)
        .layer(ServiceBuilder::new().into_inner());

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Flightline API listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_check() -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "flightline-api",
        "timestamp": Utc::now().to_rfc3339()
    })))
}
