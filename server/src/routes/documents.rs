//! Document endpoints: list, get, search, create, patch and upload.

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Multipart, Path, Query, State};
use axum::Json;

use metrodocs::search::SearchParams;
use metrodocs::{Document, DocumentDraft, DocumentPatch, IntakeError, SearchResult, UploadOutcome};

use crate::error::ApiError;
use crate::state::AppState;

/// Multipart field carrying the uploaded file.
const FILE_FIELD: &str = "file";

pub async fn list(State(state): State<AppState>) -> Json<Vec<Document>> {
    Json(state.store.list_documents())
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document>, ApiError> {
    state
        .store
        .get_document(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("Document"))
}

pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let Query(params) = params?;
    let results = metrodocs::search_documents(&state.store, &params)?;
    Ok(Json(results))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<DocumentDraft>, JsonRejection>,
) -> Result<Json<Document>, ApiError> {
    let Json(draft) = payload?;
    let doc = state.store.create_document(draft)?;
    Ok(Json(doc))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DocumentPatch>, JsonRejection>,
) -> Result<Json<Document>, ApiError> {
    let Json(patch) = payload?;
    state
        .store
        .update_document(&id, patch)?
        .map(Json)
        .ok_or(ApiError::NotFound("Document"))
}

pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadOutcome>, ApiError> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;

        let outcome = metrodocs::ingest_upload(
            &state.store,
            state.classifier.as_ref(),
            &filename,
            &bytes,
            state.max_upload_bytes,
        )?;
        return Ok(Json(outcome));
    }

    Err(IntakeError::NoFile.into())
}
