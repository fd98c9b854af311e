//! PostgreSQL-backed store.
//!
//! One parameterized statement per operation; a connection is acquired from
//! the pool per statement and released when it completes. Identifiers are
//! double-quoted throughout, which keeps the case-sensitive column spelling
//! and covers the reserved table name `"Order"`.

use crate::error::AppError;
use crate::models::{
    Admin, Communication, CommunicationPayload, Doctor, DoctorPayload, KitProduct,
    KitProductPayload, Office, OfficePayload, Order, OrderDetail, OrderDetailPayload,
    OrderPayload, Patient, PatientPayload, Product, ProductPayload,
};
use crate::store::{OfficeCascade, Store};
use async_trait::async_trait;
use sqlx::PgPool;

const OFFICE_COLUMNS: &str =
    r#""OfficeID", "OfficeName", "Address", "City", "State", "ZipCode", "Phone", "Email", "Notes""#;
const ADMIN_COLUMNS: &str = r#""AdminID", "FirstName", "LastName", "Email", "Phone""#;
const DOCTOR_COLUMNS: &str =
    r#""DoctorID", "FirstName", "LastName", "Specialization", "Phone", "Email", "OFFICE_OfficeID""#;
const PATIENT_COLUMNS: &str = r#""PatientID", "FirstName", "LastName", "DateOfBirth", "Gender", "Phone", "Email", "Address", "City", "State", "ZipCode", "OFFICE_OfficeID""#;
const COMMUNICATION_COLUMNS: &str =
    r#""PATIENTS_PatientID", "DOCTOR_DoctorID", "CommChannel", "MessageType", "DateSent""#;
const ORDER_COLUMNS: &str =
    r#""OrderID", "PATIENTS_PatientID", "DOCTOR_DoctorID", "OrderDate", "Status", "TotalAmount""#;
const ORDER_DETAIL_COLUMNS: &str =
    r#""ORDERS_OrderID", "PRODUCTS_ProductID", "Quantity", "LineTotal""#;
const PRODUCT_COLUMNS: &str =
    r#""ProductID", "ProductName", "Category", "Description", "UnitPrice", "StockQuantity""#;
const KIT_COLUMNS: &str = r#""KitID", "PRODUCT_ProductID""#;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_offices(&self) -> Result<Vec<Office>, AppError> {
        let rows = sqlx::query_as::<_, Office>(&format!(
            r#"SELECT {OFFICE_COLUMNS} FROM "Office""#
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn get_office(&self, id: i32) -> Result<Option<Office>, AppError> {
        let row = sqlx::query_as::<_, Office>(&format!(
            r#"SELECT {OFFICE_COLUMNS} FROM "Office" WHERE "OfficeID" = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create_office(&self, payload: OfficePayload) -> Result<Office, AppError> {
        tracing::debug!("insert office");
        let row = sqlx::query_as::<_, Office>(&format!(
            r#"INSERT INTO "Office" ("OfficeName", "Address", "City", "State", "ZipCode", "Phone", "Email", "Notes")
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING {OFFICE_COLUMNS}"#
        ))
        .bind(payload.office_name)
        .bind(payload.address)
        .bind(payload.city)
        .bind(payload.state)
        .bind(payload.zip_code)
        .bind(payload.phone)
        .bind(payload.email)
        .bind(payload.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_office(
        &self,
        id: i32,
        payload: OfficePayload,
    ) -> Result<Option<Office>, AppError> {
        tracing::debug!(office_id = id, "update office");
        let row = sqlx::query_as::<_, Office>(&format!(
            r#"UPDATE "Office"
               SET "OfficeName" = $1, "Address" = $2, "City" = $3, "State" = $4,
                   "ZipCode" = $5, "Phone" = $6, "Email" = $7, "Notes" = $8
               WHERE "OfficeID" = $9
               RETURNING {OFFICE_COLUMNS}"#
        ))
        .bind(payload.office_name)
        .bind(payload.address)
        .bind(payload.city)
        .bind(payload.state)
        .bind(payload.zip_code)
        .bind(payload.phone)
        .bind(payload.email)
        .bind(payload.notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_office(&self, id: i32) -> Result<OfficeCascade, AppError> {
        tracing::debug!(office_id = id, "delete office and linked doctors");
        // Two independent statements; a failure of the second leaves the
        // doctors already deleted.
        let doctors_deleted = sqlx::query(r#"DELETE FROM "Doctor" WHERE "OFFICE_OfficeID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        let offices_deleted = sqlx::query(r#"DELETE FROM "Office" WHERE "OfficeID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(OfficeCascade {
            doctors_deleted,
            offices_deleted,
        })
    }

    async fn list_admins(&self) -> Result<Vec<Admin>, AppError> {
        let rows =
            sqlx::query_as::<_, Admin>(&format!(r#"SELECT {ADMIN_COLUMNS} FROM "Admin""#))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn get_admin(&self, id: i32) -> Result<Option<Admin>, AppError> {
        let row = sqlx::query_as::<_, Admin>(&format!(
            r#"SELECT {ADMIN_COLUMNS} FROM "Admin" WHERE "AdminID" = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_admin(&self, id: i32) -> Result<u64, AppError> {
        tracing::debug!(admin_id = id, "delete admin");
        let result = sqlx::query(r#"DELETE FROM "Admin" WHERE "AdminID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_communications_for_patient(
        &self,
        patient_id: i32,
    ) -> Result<Vec<Communication>, AppError> {
        let rows = sqlx::query_as::<_, Communication>(&format!(
            r#"SELECT {COMMUNICATION_COLUMNS} FROM "Communication" WHERE "PATIENTS_PatientID" = $1"#
        ))
        .bind(patient_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create_communication(
        &self,
        payload: CommunicationPayload,
    ) -> Result<Communication, AppError> {
        tracing::debug!("insert communication");
        let row = sqlx::query_as::<_, Communication>(&format!(
            r#"INSERT INTO "Communication" ("PATIENTS_PatientID", "DOCTOR_DoctorID", "CommChannel", "MessageType", "DateSent")
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {COMMUNICATION_COLUMNS}"#
        ))
        .bind(payload.patient_id)
        .bind(payload.doctor_id)
        .bind(payload.comm_channel)
        .bind(payload.message_type)
        .bind(payload.date_sent)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>, AppError> {
        let rows =
            sqlx::query_as::<_, Doctor>(&format!(r#"SELECT {DOCTOR_COLUMNS} FROM "Doctor""#))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn get_doctor(&self, id: i32) -> Result<Option<Doctor>, AppError> {
        let row = sqlx::query_as::<_, Doctor>(&format!(
            r#"SELECT {DOCTOR_COLUMNS} FROM "Doctor" WHERE "DoctorID" = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create_doctor(&self, payload: DoctorPayload) -> Result<Doctor, AppError> {
        tracing::debug!("insert doctor");
        let row = sqlx::query_as::<_, Doctor>(&format!(
            r#"INSERT INTO "Doctor" ("FirstName", "LastName", "Specialization", "Phone", "Email", "OFFICE_OfficeID")
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING {DOCTOR_COLUMNS}"#
        ))
        .bind(payload.first_name)
        .bind(payload.last_name)
        .bind(payload.specialization)
        .bind(payload.phone)
        .bind(payload.email)
        .bind(payload.office_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_doctor(
        &self,
        id: i32,
        payload: DoctorPayload,
    ) -> Result<Option<Doctor>, AppError> {
        tracing::debug!(doctor_id = id, "update doctor");
        let row = sqlx::query_as::<_, Doctor>(&format!(
            r#"UPDATE "Doctor"
               SET "FirstName" = $1, "LastName" = $2, "Specialization" = $3,
                   "Phone" = $4, "Email" = $5, "OFFICE_OfficeID" = $6
               WHERE "DoctorID" = $7
               RETURNING {DOCTOR_COLUMNS}"#
        ))
        .bind(payload.first_name)
        .bind(payload.last_name)
        .bind(payload.specialization)
        .bind(payload.phone)
        .bind(payload.email)
        .bind(payload.office_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_doctor(&self, id: i32) -> Result<u64, AppError> {
        tracing::debug!(doctor_id = id, "delete doctor");
        let result = sqlx::query(r#"DELETE FROM "Doctor" WHERE "DoctorID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn add_kit_product(&self, payload: KitProductPayload) -> Result<KitProduct, AppError> {
        tracing::debug!("insert kit product");
        let row = sqlx::query_as::<_, KitProduct>(&format!(
            r#"INSERT INTO "Kit_Has_Products" ("KitID", "PRODUCT_ProductID")
               VALUES ($1, $2)
               RETURNING {KIT_COLUMNS}"#
        ))
        .bind(payload.kit_id)
        .bind(payload.product_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_kit_products(&self, kit_id: i32) -> Result<Vec<KitProduct>, AppError> {
        let rows = sqlx::query_as::<_, KitProduct>(&format!(
            r#"SELECT {KIT_COLUMNS} FROM "Kit_Has_Products" WHERE "KitID" = $1"#
        ))
        .bind(kit_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn replace_kit_products(
        &self,
        kit_id: i32,
        product_id: Option<i32>,
    ) -> Result<KitProduct, AppError> {
        tracing::debug!(kit_id, "replace kit products");
        // Delete-then-insert without a transaction: if the insert fails the
        // kit's previous rows are already gone.
        sqlx::query(r#"DELETE FROM "Kit_Has_Products" WHERE "KitID" = $1"#)
            .bind(kit_id)
            .execute(&self.pool)
            .await?;
        let row = sqlx::query_as::<_, KitProduct>(&format!(
            r#"INSERT INTO "Kit_Has_Products" ("KitID", "PRODUCT_ProductID")
               VALUES ($1, $2)
               RETURNING {KIT_COLUMNS}"#
        ))
        .bind(kit_id)
        .bind(product_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_kit(&self, kit_id: i32) -> Result<u64, AppError> {
        tracing::debug!(kit_id, "delete kit");
        let result = sqlx::query(r#"DELETE FROM "Kit_Has_Products" WHERE "KitID" = $1"#)
            .bind(kit_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        let rows =
            sqlx::query_as::<_, Order>(&format!(r#"SELECT {ORDER_COLUMNS} FROM "Order""#))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn get_order(&self, id: i32) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, Order>(&format!(
            r#"SELECT {ORDER_COLUMNS} FROM "Order" WHERE "OrderID" = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create_order(&self, payload: OrderPayload) -> Result<Order, AppError> {
        tracing::debug!("insert order");
        let row = sqlx::query_as::<_, Order>(&format!(
            r#"INSERT INTO "Order" ("PATIENTS_PatientID", "DOCTOR_DoctorID", "OrderDate", "Status", "TotalAmount")
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {ORDER_COLUMNS}"#
        ))
        .bind(payload.patient_id)
        .bind(payload.doctor_id)
        .bind(payload.order_date)
        .bind(payload.status)
        .bind(payload.total_amount)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_order(
        &self,
        id: i32,
        payload: OrderPayload,
    ) -> Result<Option<Order>, AppError> {
        tracing::debug!(order_id = id, "update order");
        let row = sqlx::query_as::<_, Order>(&format!(
            r#"UPDATE "Order"
               SET "PATIENTS_PatientID" = $1, "DOCTOR_DoctorID" = $2,
                   "OrderDate" = $3, "Status" = $4, "TotalAmount" = $5
               WHERE "OrderID" = $6
               RETURNING {ORDER_COLUMNS}"#
        ))
        .bind(payload.patient_id)
        .bind(payload.doctor_id)
        .bind(payload.order_date)
        .bind(payload.status)
        .bind(payload.total_amount)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_order(&self, id: i32) -> Result<u64, AppError> {
        tracing::debug!(order_id = id, "delete order");
        let result = sqlx::query(r#"DELETE FROM "Order" WHERE "OrderID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn create_order_detail(
        &self,
        payload: OrderDetailPayload,
    ) -> Result<OrderDetail, AppError> {
        tracing::debug!("insert order detail");
        let row = sqlx::query_as::<_, OrderDetail>(&format!(
            r#"INSERT INTO "Order_Detail" ("ORDERS_OrderID", "PRODUCTS_ProductID", "Quantity", "LineTotal")
               VALUES ($1, $2, $3, $4)
               RETURNING {ORDER_DETAIL_COLUMNS}"#
        ))
        .bind(payload.order_id)
        .bind(payload.product_id)
        .bind(payload.quantity)
        .bind(payload.line_total)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_order_details_for_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderDetail>, AppError> {
        let rows = sqlx::query_as::<_, OrderDetail>(&format!(
            r#"SELECT {ORDER_DETAIL_COLUMNS} FROM "Order_Detail" WHERE "ORDERS_OrderID" = $1"#
        ))
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        let rows =
            sqlx::query_as::<_, Patient>(&format!(r#"SELECT {PATIENT_COLUMNS} FROM "Patient""#))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn get_patient(&self, id: i32) -> Result<Option<Patient>, AppError> {
        let row = sqlx::query_as::<_, Patient>(&format!(
            r#"SELECT {PATIENT_COLUMNS} FROM "Patient" WHERE "PatientID" = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create_patient(&self, payload: PatientPayload) -> Result<Patient, AppError> {
        tracing::debug!("insert patient");
        let row = sqlx::query_as::<_, Patient>(&format!(
            r#"INSERT INTO "Patient" ("FirstName", "LastName", "DateOfBirth", "Gender", "Phone", "Email", "Address", "City", "State", "ZipCode", "OFFICE_OfficeID")
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
               RETURNING {PATIENT_COLUMNS}"#
        ))
        .bind(payload.first_name)
        .bind(payload.last_name)
        .bind(payload.date_of_birth)
        .bind(payload.gender)
        .bind(payload.phone)
        .bind(payload.email)
        .bind(payload.address)
        .bind(payload.city)
        .bind(payload.state)
        .bind(payload.zip_code)
        .bind(payload.office_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_patient(
        &self,
        id: i32,
        payload: PatientPayload,
    ) -> Result<Option<Patient>, AppError> {
        tracing::debug!(patient_id = id, "update patient");
        let row = sqlx::query_as::<_, Patient>(&format!(
            r#"UPDATE "Patient"
               SET "FirstName" = $1, "LastName" = $2, "DateOfBirth" = $3, "Gender" = $4,
                   "Phone" = $5, "Email" = $6, "Address" = $7, "City" = $8,
                   "State" = $9, "ZipCode" = $10, "OFFICE_OfficeID" = $11
               WHERE "PatientID" = $12
               RETURNING {PATIENT_COLUMNS}"#
        ))
        .bind(payload.first_name)
        .bind(payload.last_name)
        .bind(payload.date_of_birth)
        .bind(payload.gender)
        .bind(payload.phone)
        .bind(payload.email)
        .bind(payload.address)
        .bind(payload.city)
        .bind(payload.state)
        .bind(payload.zip_code)
        .bind(payload.office_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_patient(&self, id: i32) -> Result<u64, AppError> {
        tracing::debug!(patient_id = id, "delete patient");
        let result = sqlx::query(r#"DELETE FROM "Patient" WHERE "PatientID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let rows =
            sqlx::query_as::<_, Product>(&format!(r#"SELECT {PRODUCT_COLUMNS} FROM "Product""#))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn get_product(&self, id: i32) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, Product>(&format!(
            r#"SELECT {PRODUCT_COLUMNS} FROM "Product" WHERE "ProductID" = $1"#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn create_product(&self, payload: ProductPayload) -> Result<Product, AppError> {
        tracing::debug!("insert product");
        let row = sqlx::query_as::<_, Product>(&format!(
            r#"INSERT INTO "Product" ("ProductName", "Category", "Description", "UnitPrice", "StockQuantity")
               VALUES ($1, $2, $3, $4, $5)
               RETURNING {PRODUCT_COLUMNS}"#
        ))
        .bind(payload.product_name)
        .bind(payload.category)
        .bind(payload.description)
        .bind(payload.unit_price)
        .bind(payload.stock_quantity)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update_product(
        &self,
        id: i32,
        payload: ProductPayload,
    ) -> Result<Option<Product>, AppError> {
        tracing::debug!(product_id = id, "update product");
        let row = sqlx::query_as::<_, Product>(&format!(
            r#"UPDATE "Product"
               SET "ProductName" = $1, "Category" = $2, "Description" = $3,
                   "UnitPrice" = $4, "StockQuantity" = $5
               WHERE "ProductID" = $6
               RETURNING {PRODUCT_COLUMNS}"#
        ))
        .bind(payload.product_name)
        .bind(payload.category)
        .bind(payload.description)
        .bind(payload.unit_price)
        .bind(payload.stock_quantity)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_product(&self, id: i32) -> Result<u64, AppError> {
        tracing::debug!(product_id = id, "delete product");
        let result = sqlx::query(r#"DELETE FROM "Product" WHERE "ProductID" = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
