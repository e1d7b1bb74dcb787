// src/api/mod.rs

pub mod handler;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::models::AppState;
pub use handler::{book_handler, clinic_handler, relay_submit_handler, whatsapp_link_handler};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/clinic", get(clinic_handler))
        .route("/links/whatsapp", get(whatsapp_link_handler))
        .route("/book", post(book_handler))
        .route("/api/submit", post(relay_submit_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
