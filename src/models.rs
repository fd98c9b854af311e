//! Row and request-payload types for the nine exposed resources.
//!
//! JSON keys and database identifiers share the original column spelling
//! (`OfficeID`, `OFFICE_OfficeID`, ...), so every field carries serde and
//! sqlx renames. Payload structs are all-`Option` with defaults: a field
//! absent from a PUT body becomes `None` and is written as NULL, which is
//! what makes updates full-row replaces rather than patches.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Office {
    #[serde(rename = "OfficeID")]
    #[sqlx(rename = "OfficeID")]
    pub office_id: i32,
    #[serde(rename = "OfficeName")]
    #[sqlx(rename = "OfficeName")]
    pub office_name: Option<String>,
    #[serde(rename = "Address")]
    #[sqlx(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "City")]
    #[sqlx(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    #[sqlx(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "ZipCode")]
    #[sqlx(rename = "ZipCode")]
    pub zip_code: Option<String>,
    #[serde(rename = "Phone")]
    #[sqlx(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    #[sqlx(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Notes")]
    #[sqlx(rename = "Notes")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OfficePayload {
    #[serde(rename = "OfficeName")]
    pub office_name: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "ZipCode")]
    pub zip_code: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Notes")]
    pub notes: Option<String>,
}

/// Admins are never written through the API, so there is no payload type.
/// The column set is the read surface; extra columns in the table stay
/// unselected.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Admin {
    #[serde(rename = "AdminID")]
    #[sqlx(rename = "AdminID")]
    pub admin_id: i32,
    #[serde(rename = "FirstName")]
    #[sqlx(rename = "FirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName")]
    #[sqlx(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "Email")]
    #[sqlx(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Phone")]
    #[sqlx(rename = "Phone")]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Doctor {
    #[serde(rename = "DoctorID")]
    #[sqlx(rename = "DoctorID")]
    pub doctor_id: i32,
    #[serde(rename = "FirstName")]
    #[sqlx(rename = "FirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName")]
    #[sqlx(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "Specialization")]
    #[sqlx(rename = "Specialization")]
    pub specialization: Option<String>,
    #[serde(rename = "Phone")]
    #[sqlx(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    #[sqlx(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "OFFICE_OfficeID")]
    #[sqlx(rename = "OFFICE_OfficeID")]
    pub office_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DoctorPayload {
    #[serde(rename = "FirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "Specialization")]
    pub specialization: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "OFFICE_OfficeID")]
    pub office_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Patient {
    #[serde(rename = "PatientID")]
    #[sqlx(rename = "PatientID")]
    pub patient_id: i32,
    #[serde(rename = "FirstName")]
    #[sqlx(rename = "FirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName")]
    #[sqlx(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "DateOfBirth")]
    #[sqlx(rename = "DateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "Gender")]
    #[sqlx(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Phone")]
    #[sqlx(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    #[sqlx(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Address")]
    #[sqlx(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "City")]
    #[sqlx(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    #[sqlx(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "ZipCode")]
    #[sqlx(rename = "ZipCode")]
    pub zip_code: Option<String>,
    #[serde(rename = "OFFICE_OfficeID")]
    #[sqlx(rename = "OFFICE_OfficeID")]
    pub office_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PatientPayload {
    #[serde(rename = "FirstName")]
    pub first_name: Option<String>,
    #[serde(rename = "LastName")]
    pub last_name: Option<String>,
    #[serde(rename = "DateOfBirth")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "ZipCode")]
    pub zip_code: Option<String>,
    #[serde(rename = "OFFICE_OfficeID")]
    pub office_id: Option<i32>,
}

/// Communications have no exposed key; the read surface is the filtered list
/// per patient.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Communication {
    #[serde(rename = "PATIENTS_PatientID")]
    #[sqlx(rename = "PATIENTS_PatientID")]
    pub patient_id: Option<i32>,
    #[serde(rename = "DOCTOR_DoctorID")]
    #[sqlx(rename = "DOCTOR_DoctorID")]
    pub doctor_id: Option<i32>,
    #[serde(rename = "CommChannel")]
    #[sqlx(rename = "CommChannel")]
    pub comm_channel: Option<String>,
    #[serde(rename = "MessageType")]
    #[sqlx(rename = "MessageType")]
    pub message_type: Option<String>,
    #[serde(rename = "DateSent")]
    #[sqlx(rename = "DateSent")]
    pub date_sent: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommunicationPayload {
    #[serde(rename = "PATIENTS_PatientID")]
    pub patient_id: Option<i32>,
    #[serde(rename = "DOCTOR_DoctorID")]
    pub doctor_id: Option<i32>,
    #[serde(rename = "CommChannel")]
    pub comm_channel: Option<String>,
    #[serde(rename = "MessageType")]
    pub message_type: Option<String>,
    #[serde(rename = "DateSent")]
    pub date_sent: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Order {
    #[serde(rename = "OrderID")]
    #[sqlx(rename = "OrderID")]
    pub order_id: i32,
    #[serde(rename = "PATIENTS_PatientID")]
    #[sqlx(rename = "PATIENTS_PatientID")]
    pub patient_id: Option<i32>,
    #[serde(rename = "DOCTOR_DoctorID")]
    #[sqlx(rename = "DOCTOR_DoctorID")]
    pub doctor_id: Option<i32>,
    #[serde(rename = "OrderDate")]
    #[sqlx(rename = "OrderDate")]
    pub order_date: Option<NaiveDate>,
    #[serde(rename = "Status")]
    #[sqlx(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "TotalAmount")]
    #[sqlx(rename = "TotalAmount")]
    pub total_amount: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrderPayload {
    #[serde(rename = "PATIENTS_PatientID")]
    pub patient_id: Option<i32>,
    #[serde(rename = "DOCTOR_DoctorID")]
    pub doctor_id: Option<i32>,
    #[serde(rename = "OrderDate")]
    pub order_date: Option<NaiveDate>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
    #[serde(rename = "TotalAmount")]
    pub total_amount: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct OrderDetail {
    #[serde(rename = "ORDERS_OrderID")]
    #[sqlx(rename = "ORDERS_OrderID")]
    pub order_id: Option<i32>,
    #[serde(rename = "PRODUCTS_ProductID")]
    #[sqlx(rename = "PRODUCTS_ProductID")]
    pub product_id: Option<i32>,
    #[serde(rename = "Quantity")]
    #[sqlx(rename = "Quantity")]
    pub quantity: Option<i32>,
    #[serde(rename = "LineTotal")]
    #[sqlx(rename = "LineTotal")]
    pub line_total: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct OrderDetailPayload {
    #[serde(rename = "ORDERS_OrderID")]
    pub order_id: Option<i32>,
    #[serde(rename = "PRODUCTS_ProductID")]
    pub product_id: Option<i32>,
    #[serde(rename = "Quantity")]
    pub quantity: Option<i32>,
    #[serde(rename = "LineTotal")]
    pub line_total: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Product {
    #[serde(rename = "ProductID")]
    #[sqlx(rename = "ProductID")]
    pub product_id: i32,
    #[serde(rename = "ProductName")]
    #[sqlx(rename = "ProductName")]
    pub product_name: Option<String>,
    #[serde(rename = "Category")]
    #[sqlx(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Description")]
    #[sqlx(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "UnitPrice")]
    #[sqlx(rename = "UnitPrice")]
    pub unit_price: Option<f64>,
    #[serde(rename = "StockQuantity")]
    #[sqlx(rename = "StockQuantity")]
    pub stock_quantity: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductPayload {
    #[serde(rename = "ProductName")]
    pub product_name: Option<String>,
    #[serde(rename = "Category")]
    pub category: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "UnitPrice")]
    pub unit_price: Option<f64>,
    #[serde(rename = "StockQuantity")]
    pub stock_quantity: Option<i32>,
}

/// One row of the Kit <-> Product association; (KitID, ProductID) is the
/// composite primary key.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct KitProduct {
    #[serde(rename = "KitID")]
    #[sqlx(rename = "KitID")]
    pub kit_id: i32,
    #[serde(rename = "PRODUCT_ProductID")]
    #[sqlx(rename = "PRODUCT_ProductID")]
    pub product_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct KitProductPayload {
    #[serde(rename = "KitID")]
    pub kit_id: Option<i32>,
    #[serde(rename = "PRODUCT_ProductID")]
    pub product_id: Option<i32>,
}

/// Body of `PUT /kits/:kitId`: the single product that replaces the kit's
/// current association set.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct KitUpdatePayload {
    #[serde(rename = "PRODUCT_ProductID")]
    pub product_id: Option<i32>,
}
