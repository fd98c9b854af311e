//! Doctor CRUD handlers.

use crate::error::AppError;
use crate::models::DoctorPayload;
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.list_doctors().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.get_doctor(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<DoctorPayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.create_doctor(payload).await?;
    Ok(response::created("Doctor created", row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<DoctorPayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.update_doctor(id, payload).await?;
    Ok(response::updated("Doctor updated", row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.delete_doctor(id).await?;
    Ok(response::deleted("Doctor deleted", rows))
}
