//! Kit association handlers over the `Kit_Has_Products` join table.
//!
//! Update replaces the kit's entire association set with the single supplied
//! product; any prior rows for the kit are gone afterwards.

use crate::error::AppError;
use crate::models::{KitProductPayload, KitUpdatePayload};
use crate::response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<KitProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.store.add_kit_product(payload).await?;
    Ok(response::created("Kit product added", row))
}

pub async fn list(
    State(state): State<AppState>,
    Path(kit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.store.list_kit_products(kit_id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(kit_id): Path<i32>,
    Json(payload): Json<KitUpdatePayload>,
) -> Result<impl IntoResponse, AppError> {
    let row = state
        .store
        .replace_kit_products(kit_id, payload.product_id)
        .await?;
    Ok(response::updated("Kit products updated", row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(kit_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.delete_kit(kit_id).await?;
    Ok(response::deleted("Kit deleted", rows))
}
