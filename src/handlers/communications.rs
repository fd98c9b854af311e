//! Communication handlers: create, and the list scoped to one patient.
//! There is no unscoped list, update, or delete.

use crate::error::AppError;
use crate::models::CommunicationPayload;
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list_for_patient(
    State(state): State<AppState>,
    Path(patient_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(
        state.store.list_communications_for_patient(patient_id).await?,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CommunicationPayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.create_communication(payload).await?;
    Ok(response::created("Communication created", row))
}
