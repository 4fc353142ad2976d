use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{
    error::AppResult,
    routes::{AppState, SERVICE_NAME},
    status_check::{self, StatusCheckInput, StatusCheckView},
};

pub async fn root() -> Json<Value> {
    Json(json!({ "message": format!("{SERVICE_NAME} API is running!") }))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<StatusCheckInput>,
) -> AppResult<Json<StatusCheckView>> {
    Ok(Json(status_check::record(&state.pool, input).await?))
}

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StatusCheckView>>> {
    Ok(Json(status_check::list(&state.pool).await?))
}
