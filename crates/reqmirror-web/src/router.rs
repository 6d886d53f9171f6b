//! Axum router wiring.
//!
//! Four GET routes, all describing the current request (and therefore all
//! counting toward statistics).

use axum::{routing::get, Router};

use crate::{app_state::AppState, handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/data.json", get(handlers::data::as_json))
        .route("/data.png", get(handlers::data::as_png))
        .route("/data.jpeg", get(handlers::data::as_jpeg))
        .with_state(state)
}
