//! QR job-card endpoints.
//!
//! `GET /qr-codes/:key` looks the card up by its printed code, while
//! `PATCH /qr-codes/:key` addresses it by record id.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use metrodocs::{QrCode, QrCodeDraft, QrCodePatch, ScanResult};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<QrCode>> {
    Json(state.store.list_qr_codes())
}

pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<QrCode>, ApiError> {
    state
        .store
        .get_qr_code_by_code(&code)
        .map(Json)
        .ok_or(ApiError::NotFound("QR code"))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<QrCodeDraft>, JsonRejection>,
) -> Result<Json<QrCode>, ApiError> {
    let Json(draft) = payload?;
    let qr = state.store.create_qr_code(draft)?;
    Ok(Json(qr))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<QrCodePatch>, JsonRejection>,
) -> Result<Json<QrCode>, ApiError> {
    let Json(patch) = payload?;
    state
        .store
        .update_qr_code(&id, patch)?
        .map(Json)
        .ok_or(ApiError::NotFound("QR code"))
}

pub async fn simulate_scan(State(state): State<AppState>) -> Result<Json<ScanResult>, ApiError> {
    metrodocs::simulate_scan(&state.store, &mut rand::thread_rng())
        .map(Json)
        .ok_or(ApiError::NotFound("QR code"))
}
