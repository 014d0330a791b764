//! Axum route handler for message enhancement.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::enhance::enhancer::{enhance, EnhanceRequest, EnhanceResponse};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/enhance
///
/// Returns 500 when no LLM credential is configured; never falls back to
/// the raw message.
pub async fn handle_enhance(
    State(state): State<AppState>,
    payload: Result<Json<EnhanceRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let enhanced_body = enhance(state.text_generator.as_deref(), request).await?;

    Ok(Json(EnhanceResponse { enhanced_body }))
}
