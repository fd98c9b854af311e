//! Patient CRUD handlers.

use crate::error::AppError;
use crate::models::PatientPayload;
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.list_patients().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.get_patient(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<PatientPayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.create_patient(payload).await?;
    Ok(response::created("Patient created", row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PatientPayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.update_patient(id, payload).await?;
    Ok(response::updated("Patient updated", row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.delete_patient(id).await?;
    Ok(response::deleted("Patient deleted", rows))
}
