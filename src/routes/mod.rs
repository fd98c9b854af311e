//! Router assembly: common routes plus the nine resource surfaces, with
//! blanket CORS over everything.

pub mod common;

use crate::handlers::{
    admins, communications, doctors, kits, offices, order_details, orders, patients, products,
};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

/// The full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common::common_routes(state.clone()))
        .merge(resource_routes(state))
        .layer(CorsLayer::permissive())
}

/// Resource routes only, without the CORS layer. Verb sets differ per
/// resource; admins, communications, kits, and order details expose less
/// than full CRUD.
pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/offices", get(offices::list).post(offices::create))
        .route(
            "/offices/:id",
            get(offices::get).put(offices::update).delete(offices::delete),
        )
        .route("/admins", get(admins::list))
        .route("/admins/:id", get(admins::get).delete(admins::delete))
        .route("/communications", post(communications::create))
        .route(
            "/communications/patient/:patient_id",
            get(communications::list_for_patient),
        )
        .route("/doctors", get(doctors::list).post(doctors::create))
        .route(
            "/doctors/:id",
            get(doctors::get).put(doctors::update).delete(doctors::delete),
        )
        .route("/kits", post(kits::create))
        .route(
            "/kits/:kit_id",
            get(kits::list).put(kits::update).delete(kits::delete),
        )
        .route("/orders", get(orders::list).post(orders::create))
        .route(
            "/orders/:id",
            get(orders::get).put(orders::update).delete(orders::delete),
        )
        .route("/order-details", post(order_details::create))
        .route(
            "/order-details/:order_id",
            get(order_details::list_for_order),
        )
        .route("/patients", get(patients::list).post(patients::create))
        .route(
            "/patients/:id",
            get(patients::get).put(patients::update).delete(patients::delete),
        )
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/:id",
            get(products::get).put(products::update).delete(products::delete),
        )
        .with_state(state)
}
