//! Router assembly.
//!
//! The JSON API lives under `/api`; everything else falls through to the
//! static front-end served from the configured assets directory.

pub mod download;
pub mod svg;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.static_dir).append_index_html_on_directories(true);

    Router::new()
        .route("/api/default-svg", get(svg::default_svg))
        .route("/api/process-svg", post(svg::process_svg))
        .route("/api/reverse-paths", post(svg::reverse_paths))
        .route("/api/download-animation", post(download::download_animation))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .fallback_service(assets)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
