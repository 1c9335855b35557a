//! Axum route handlers for the autosaved user fields.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::state::AppState;
use crate::user_data::models::{UserDataField, UserDataView};

#[derive(Debug, Deserialize)]
pub struct SaveFieldRequest {
    pub value: String,
}

/// GET /api/user-data
pub async fn handle_get_user_data(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<UserDataView>, AppError> {
    let row = state
        .store
        .load(user.id)
        .await
        .map_err(AppError::Persistence)?;
    Ok(Json(row.map(UserDataView::from).unwrap_or_default()))
}

/// PUT /api/user-data/:field
///
/// Over-limit values are rejected with 422 and never reach the store.
pub async fn handle_save_field(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(field): Path<UserDataField>,
    payload: Result<Json<SaveFieldRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;
    field.validate(&request.value)?;

    state
        .store
        .save_field(user.id, field, &request.value)
        .await
        .map_err(AppError::Persistence)?;

    Ok(StatusCode::NO_CONTENT)
}
