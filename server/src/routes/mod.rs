//! Router assembly.

mod documents;
mod health;
mod qr_codes;
mod stats;
mod workflow;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use metrodocs::ServerConfig;

use crate::state::AppState;

/// Room for multipart boundaries and part headers on top of the file itself,
/// so that oversized files reach the intake check and get a proper 413.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Builds the full application router.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let upload_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api_routes(upload_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}

fn api_routes(upload_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/documents", get(documents::list).post(documents::create))
        .route("/documents/search", get(documents::search))
        .route(
            "/documents/upload",
            post(documents::upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/documents/:id",
            get(documents::get_one).patch(documents::update),
        )
        .route("/workflow", get(workflow::list).post(workflow::create))
        .route("/workflow/pending", get(workflow::pending))
        .route("/workflow/:id", patch(workflow::update))
        .route("/workflow/:id/approve", post(workflow::approve))
        .route("/workflow/:id/reject", post(workflow::reject))
        .route("/qr-codes", get(qr_codes::list).post(qr_codes::create))
        .route(
            "/qr-codes/:key",
            get(qr_codes::get_by_code).patch(qr_codes::update),
        )
        .route("/qr-scan/simulate", post(qr_codes::simulate_scan))
        .route("/stats", get(stats::get_stats))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<_> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring unusable CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
