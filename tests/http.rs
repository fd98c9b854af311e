//! Route-level tests: the full router over the in-memory store, driven with
//! `tower::ServiceExt::oneshot`. No database required.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use medoffice_api::{app, AppState, MemoryStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone());
    (app(state), store)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(v) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&v).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn root_reports_liveness() {
    let (app, _) = test_app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"Backend is running!");
}

#[tokio::test]
async fn health_and_version_respond() {
    let (app, _) = test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "medoffice-api");
}

#[tokio::test]
async fn created_product_round_trips_with_generated_id() {
    let (app, _) = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/products",
        Some(json!({
            "ProductName": "Bandage",
            "Category": "Supplies",
            "Description": "Sterile",
            "UnitPrice": 2.50,
            "StockQuantity": 100
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Product created");
    let id = body["data"]["ProductID"].as_i64().expect("generated id");

    let (status, row) = send(&app, "GET", &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row["ProductID"], id);
    assert_eq!(row["ProductName"], "Bandage");
    assert_eq!(row["Category"], "Supplies");
    assert_eq!(row["Description"], "Sterile");
    assert_eq!(row["UnitPrice"], 2.50);
    assert_eq!(row["StockQuantity"], 100);
}

#[tokio::test]
async fn listing_before_any_create_returns_empty_array() {
    let (app, _) = test_app();
    for uri in ["/offices", "/admins", "/doctors", "/orders", "/patients", "/products"] {
        let (status, body) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn get_by_id_miss_is_a_null_success() {
    let (app, _) = test_app();
    let (status, body) = send(&app, "GET", "/offices/42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn put_replaces_the_whole_row() {
    let (app, _) = test_app();
    let (_, created) = send(
        &app,
        "POST",
        "/offices",
        Some(json!({
            "OfficeName": "Downtown",
            "Address": "1 Main St",
            "City": "Springfield",
            "Phone": "555-0100"
        })),
    )
    .await;
    let id = created["data"]["OfficeID"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/offices/{id}"),
        Some(json!({ "OfficeName": "Uptown" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["message"], "Office updated");
    assert_eq!(updated["data"]["OfficeName"], "Uptown");
    // Unsupplied columns are overwritten, not preserved.
    assert_eq!(updated["data"]["Address"], Value::Null);
    assert_eq!(updated["data"]["City"], Value::Null);
    assert_eq!(updated["data"]["Phone"], Value::Null);

    let (_, row) = send(&app, "GET", &format!("/offices/{id}"), None).await;
    assert_eq!(row["Address"], Value::Null);
}

#[tokio::test]
async fn updating_a_missing_row_returns_null_data() {
    let (app, _) = test_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/products/99",
        Some(json!({ "ProductName": "Gauze" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product updated");
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn office_delete_removes_its_doctors_too() {
    let (app, _) = test_app();
    let (_, office) = send(&app, "POST", "/offices", Some(json!({ "OfficeName": "A" }))).await;
    let (_, other) = send(&app, "POST", "/offices", Some(json!({ "OfficeName": "B" }))).await;
    let office_id = office["data"]["OfficeID"].as_i64().unwrap();
    let other_id = other["data"]["OfficeID"].as_i64().unwrap();

    for name in ["One", "Two"] {
        send(
            &app,
            "POST",
            "/doctors",
            Some(json!({ "FirstName": name, "OFFICE_OfficeID": office_id })),
        )
        .await;
    }
    send(
        &app,
        "POST",
        "/doctors",
        Some(json!({ "FirstName": "Elsewhere", "OFFICE_OfficeID": other_id })),
    )
    .await;

    let (status, body) = send(&app, "DELETE", &format!("/offices/{office_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Office and linked doctors deleted");
    assert_eq!(body["doctors_deleted"], 2);
    assert_eq!(body["offices_deleted"], 1);

    let (_, office_row) = send(&app, "GET", &format!("/offices/{office_id}"), None).await;
    assert_eq!(office_row, Value::Null);
    let (_, doctors) = send(&app, "GET", "/doctors", None).await;
    let doctors = doctors.as_array().unwrap();
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0]["FirstName"], "Elsewhere");
}

#[tokio::test]
async fn kit_update_collapses_prior_associations() {
    let (app, _) = test_app();
    for product in [11, 12] {
        let (status, _) = send(
            &app,
            "POST",
            "/kits",
            Some(json!({ "KitID": 5, "PRODUCT_ProductID": product })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
        &app,
        "PUT",
        "/kits/5",
        Some(json!({ "PRODUCT_ProductID": 13 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Kit products updated");

    let (_, rows) = send(&app, "GET", "/kits/5", None).await;
    assert_eq!(rows, json!([{ "KitID": 5, "PRODUCT_ProductID": 13 }]));
}

#[tokio::test]
async fn kit_delete_removes_every_association_row() {
    let (app, _) = test_app();
    for product in [1, 2, 3] {
        send(
            &app,
            "POST",
            "/kits",
            Some(json!({ "KitID": 7, "PRODUCT_ProductID": product })),
        )
        .await;
    }
    let (status, body) = send(&app, "DELETE", "/kits/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Kit deleted");
    assert_eq!(body["rows_affected"], 3);

    let (_, rows) = send(&app, "GET", "/kits/7", None).await;
    assert_eq!(rows, json!([]));
}

#[tokio::test]
async fn communications_list_is_scoped_to_the_patient() {
    let (app, _) = test_app();
    for (patient, channel) in [(1, "email"), (1, "sms"), (2, "phone")] {
        let (status, body) = send(
            &app,
            "POST",
            "/communications",
            Some(json!({
                "PATIENTS_PatientID": patient,
                "DOCTOR_DoctorID": 1,
                "CommChannel": channel,
                "MessageType": "reminder",
                "DateSent": "2024-03-01T09:30:00"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Communication created");
    }

    let (status, rows) = send(&app, "GET", "/communications/patient/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["PATIENTS_PatientID"] == 1));
}

#[tokio::test]
async fn order_details_list_by_order() {
    let (app, _) = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/order-details",
        Some(json!({
            "ORDERS_OrderID": 3,
            "PRODUCTS_ProductID": 8,
            "Quantity": 2,
            "LineTotal": 5.00
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Order detail added");

    let (status, rows) = send(&app, "GET", "/order-details/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        rows,
        json!([{
            "ORDERS_OrderID": 3,
            "PRODUCTS_ProductID": 8,
            "Quantity": 2,
            "LineTotal": 5.0
        }])
    );
}

#[tokio::test]
async fn admin_surface_has_no_write_routes() {
    let (app, store) = test_app();
    let admin = store.seed_admin("Pat", "Lee");

    let (status, rows) = send(&app, "GET", "/admins", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, "POST", "/admins", Some(json!({ "FirstName": "X" }))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    let (status, _) = send(
        &app,
        "PUT",
        &format!("/admins/{}", admin.admin_id),
        Some(json!({ "FirstName": "X" })),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, body) = send(&app, "DELETE", &format!("/admins/{}", admin.admin_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Admin deleted");
    assert_eq!(body["rows_affected"], 1);
}

#[tokio::test]
async fn malformed_bodies_fail_before_reaching_the_store() {
    let (app, _) = test_app();
    let (status, _) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "UnitPrice": "two fifty" })),
    )
    .await;
    assert!(status.is_client_error());

    // An array where an object is expected is also a typed failure.
    let (status, _) = send(&app, "POST", "/offices", Some(json!(["nope"]))).await;
    assert!(status.is_client_error());

    let (_, rows) = send(&app, "GET", "/products", None).await;
    assert_eq!(rows, json!([]));
}

#[tokio::test]
async fn orders_full_crud_round_trip() {
    let (app, _) = test_app();
    let (status, created) = send(
        &app,
        "POST",
        "/orders",
        Some(json!({
            "PATIENTS_PatientID": 1,
            "DOCTOR_DoctorID": 2,
            "OrderDate": "2024-06-01",
            "Status": "pending",
            "TotalAmount": 19.95
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["data"]["OrderID"].as_i64().unwrap();

    let (_, updated) = send(
        &app,
        "PUT",
        &format!("/orders/{id}"),
        Some(json!({
            "PATIENTS_PatientID": 1,
            "DOCTOR_DoctorID": 2,
            "OrderDate": "2024-06-01",
            "Status": "shipped",
            "TotalAmount": 19.95
        })),
    )
    .await;
    assert_eq!(updated["data"]["Status"], "shipped");

    let (status, body) = send(&app, "DELETE", &format!("/orders/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows_affected"], 1);
    let (_, row) = send(&app, "GET", &format!("/orders/{id}"), None).await;
    assert_eq!(row, Value::Null);
}
