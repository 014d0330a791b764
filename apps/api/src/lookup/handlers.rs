//! Axum route handler for representative lookup.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::lookup::resolver::resolve;
use crate::models::representative::ResolvedRepresentative;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepresentativeRequest {
    pub postal_code: Option<String>,
    pub level: Option<String>,
}

/// POST /api/representative
pub async fn handle_lookup_representative(
    State(state): State<AppState>,
    payload: Result<Json<RepresentativeRequest>, JsonRejection>,
) -> Result<Json<ResolvedRepresentative>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let representative = resolve(
        state.representatives.as_ref(),
        request.postal_code.as_deref(),
        request.level.as_deref(),
    )
    .await?;

    Ok(Json(representative))
}
