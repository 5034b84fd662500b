//! Main entry point for the Carport backend.
//!
//! This file initializes the Axum web server, binds the stores, and registers
//! all API routes and middleware. It orchestrates the application's startup
//! and defines its overall structure.

mod api;
mod auth;
mod config;
mod errors;
mod repositories;
mod services;
mod storage;
mod utils;

use crate::api::common::ApiResponse;
use axum::{Extension, Router, response::Json, routing::get};
use config::Config;
use storage::AppState;
use tracing::info;
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let state = AppState::new(&config);

    let app = Router::new()
        .route("/", get(root_handler))
        .nest("/api/cars", api::cars::routes::cars_router())
        .nest("/auth", auth::routes::auth_router())
        .layer(Extension(state));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting Carport server on port {}", config.server_port);
    axum::serve(listener, app).await.unwrap();
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "Carport Backend",
            "version": "0.1.0"
        }),
        "Welcome to Carport API",
    ))
}
