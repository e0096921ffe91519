use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news", get(handlers::get_news))
        .route("/api/summarize", post(handlers::summarize))
        .route("/health", get(handlers::health))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use pn_core::{Article, Error, Result};
}
