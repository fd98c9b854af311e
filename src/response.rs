//! Standard response bodies for mutating routes.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Body of create/update responses: a verb phrase plus the affected row
/// (including any generated key), or `null` when no row matched.
#[derive(Serialize)]
pub struct Mutation<T> {
    pub message: &'static str,
    pub data: T,
}

#[derive(Serialize)]
pub struct Deleted {
    pub message: &'static str,
    pub rows_affected: u64,
}

/// Result of the office delete: both statements' row counts together.
#[derive(Serialize)]
pub struct CascadeDeleted {
    pub message: &'static str,
    pub doctors_deleted: u64,
    pub offices_deleted: u64,
}

pub fn created<T: Serialize>(message: &'static str, data: T) -> (StatusCode, Json<Mutation<T>>) {
    (StatusCode::CREATED, Json(Mutation { message, data }))
}

pub fn updated<T: Serialize>(message: &'static str, data: T) -> (StatusCode, Json<Mutation<T>>) {
    (StatusCode::OK, Json(Mutation { message, data }))
}

pub fn deleted(message: &'static str, rows_affected: u64) -> Json<Deleted> {
    Json(Deleted {
        message,
        rows_affected,
    })
}
