use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;

use crate::state::AppState;

pub async fn get_stats(State(state): State<AppState>) -> Json<BTreeMap<String, i64>> {
    Json(metrodocs::stats::get_all(&state.store))
}
