// src/routes/mod.rs
pub mod chat;

use crate::{
    config::{Config, Variant},
    state::SharedState,
};
use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use chat::{chat_handler, legacy_get_handler};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router(config: &Config) -> Router<SharedState> {
    let api = match config.variant {
        Variant::Current => current_api(config),
        Variant::Legacy => legacy_api(),
    };

    Router::new()
        .merge(api)
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
}

fn current_api(config: &Config) -> Router<SharedState> {
    // foreign origins get no allow-origin header
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.allowed_origin.clone()]))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/chat", post(chat_handler))
        .layer(cors)
}

fn legacy_api() -> Router<SharedState> {
    Router::new()
        .route("/get", get(legacy_get_handler))
        .layer(CorsLayer::very_permissive())
}
