//! Workflow endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;

use metrodocs::{WorkflowDraft, WorkflowEngine, WorkflowItem, WorkflowPatch};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Json<Vec<WorkflowItem>> {
    Json(state.store.list_workflow_items())
}

pub async fn pending(State(state): State<AppState>) -> Json<Vec<WorkflowItem>> {
    Json(WorkflowEngine::new(&state.store).pending_items())
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<WorkflowDraft>, JsonRejection>,
) -> Result<Json<WorkflowItem>, ApiError> {
    let Json(draft) = payload?;
    let item = state.store.create_workflow_item(draft)?;
    Ok(Json(item))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<WorkflowPatch>, JsonRejection>,
) -> Result<Json<WorkflowItem>, ApiError> {
    let Json(patch) = payload?;
    state
        .store
        .update_workflow_item(&id, patch)?
        .map(Json)
        .ok_or(ApiError::NotFound("Workflow item"))
}

pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkflowItem>, ApiError> {
    let item = WorkflowEngine::new(&state.store).approve(&id)?;
    Ok(Json(item))
}

pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WorkflowItem>, ApiError> {
    let item = WorkflowEngine::new(&state.store).reject(&id)?;
    Ok(Json(item))
}
