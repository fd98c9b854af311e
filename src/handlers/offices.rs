//! Office CRUD handlers. Delete cascades to the office's doctors.

use crate::error::AppError;
use crate::models::OfficePayload;
use crate::response::{self, CascadeDeleted};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.list_offices().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.get_office(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<OfficePayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.create_office(payload).await?;
    Ok(response::created("Office created", row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<OfficePayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.update_office(id, payload).await?;
    Ok(response::updated("Office updated", row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cascade = state.store.delete_office(id).await?;
    Ok(Json(CascadeDeleted {
        message: "Office and linked doctors deleted",
        doctors_deleted: cascade.doctors_deleted,
        offices_deleted: cascade.offices_deleted,
    }))
}
