//! Axum route handlers for the profile generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::profile::generator::{generate_profile, GenerateProfileRequest};
use crate::state::AppState;

/// POST /api/ideal-customer-profile
///
/// Returns the model's JSON verbatim. Failures map to a fixed 500 message.
pub async fn handle_generate_profile(
    State(state): State<AppState>,
    payload: Result<Json<GenerateProfileRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let profile = generate_profile(state.llm.as_ref(), &request).await?;
    Ok(Json(profile))
}

/// Any other method on the generation route.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
