//! Order CRUD handlers.

use crate::error::AppError;
use crate::models::OrderPayload;
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.list_orders().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.get_order(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<OrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.create_order(payload).await?;
    Ok(response::created("Order created", row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<OrderPayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.update_order(id, payload).await?;
    Ok(response::updated("Order updated", row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.delete_order(id).await?;
    Ok(response::deleted("Order deleted", rows))
}
