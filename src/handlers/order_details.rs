//! Order-detail handlers: create, and the list scoped to one order.

use crate::error::AppError;
use crate::models::OrderDetailPayload;
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<OrderDetailPayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.create_order_detail(payload).await?;
    Ok(response::created("Order detail added", row))
}

pub async fn list_for_order(
    State(state): State<AppState>,
    Path(order_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.list_order_details_for_order(order_id).await?))
}
