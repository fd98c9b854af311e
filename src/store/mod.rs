//! Store seam: one async operation per exposed route.
//!
//! `PgStore` is the production backend; `MemoryStore` mirrors its observable
//! semantics for tests and single-process runs. Handlers hold the trait
//! object, never a concrete backend.

use crate::error::AppError;
use crate::models::{
    Admin, Communication, CommunicationPayload, Doctor, DoctorPayload, KitProduct,
    KitProductPayload, Office, OfficePayload, Order, OrderDetail, OrderDetailPayload,
    OrderPayload, Patient, PatientPayload, Product, ProductPayload,
};
use async_trait::async_trait;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Row counts from the two-statement office delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OfficeCascade {
    pub doctors_deleted: u64,
    pub offices_deleted: u64,
}

#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap liveness probe against the backend, used by the readiness route.
    async fn ping(&self) -> Result<(), AppError>;

    async fn list_offices(&self) -> Result<Vec<Office>, AppError>;
    async fn get_office(&self, id: i32) -> Result<Option<Office>, AppError>;
    async fn create_office(&self, payload: OfficePayload) -> Result<Office, AppError>;
    async fn update_office(
        &self,
        id: i32,
        payload: OfficePayload,
    ) -> Result<Option<Office>, AppError>;
    /// Deletes the office's doctors, then the office itself, as two separate
    /// statements on separate pool acquisitions. Not atomic: a failure of the
    /// second statement leaves the doctors already deleted.
    async fn delete_office(&self, id: i32) -> Result<OfficeCascade, AppError>;

    async fn list_admins(&self) -> Result<Vec<Admin>, AppError>;
    async fn get_admin(&self, id: i32) -> Result<Option<Admin>, AppError>;
    async fn delete_admin(&self, id: i32) -> Result<u64, AppError>;

    async fn list_communications_for_patient(
        &self,
        patient_id: i32,
    ) -> Result<Vec<Communication>, AppError>;
    async fn create_communication(
        &self,
        payload: CommunicationPayload,
    ) -> Result<Communication, AppError>;

    async fn list_doctors(&self) -> Result<Vec<Doctor>, AppError>;
    async fn get_doctor(&self, id: i32) -> Result<Option<Doctor>, AppError>;
    async fn create_doctor(&self, payload: DoctorPayload) -> Result<Doctor, AppError>;
    async fn update_doctor(
        &self,
        id: i32,
        payload: DoctorPayload,
    ) -> Result<Option<Doctor>, AppError>;
    async fn delete_doctor(&self, id: i32) -> Result<u64, AppError>;

    async fn add_kit_product(&self, payload: KitProductPayload) -> Result<KitProduct, AppError>;
    async fn list_kit_products(&self, kit_id: i32) -> Result<Vec<KitProduct>, AppError>;
    /// Replaces the kit's whole association set with the single supplied
    /// product: delete-all-for-kit, then insert-one. Lossy and, like the
    /// office cascade, not wrapped in a transaction.
    async fn replace_kit_products(
        &self,
        kit_id: i32,
        product_id: Option<i32>,
    ) -> Result<KitProduct, AppError>;
    async fn delete_kit(&self, kit_id: i32) -> Result<u64, AppError>;

    async fn list_orders(&self) -> Result<Vec<Order>, AppError>;
    async fn get_order(&self, id: i32) -> Result<Option<Order>, AppError>;
    async fn create_order(&self, payload: OrderPayload) -> Result<Order, AppError>;
    async fn update_order(
        &self,
        id: i32,
        payload: OrderPayload,
    ) -> Result<Option<Order>, AppError>;
    async fn delete_order(&self, id: i32) -> Result<u64, AppError>;

    async fn create_order_detail(
        &self,
        payload: OrderDetailPayload,
    ) -> Result<OrderDetail, AppError>;
    async fn list_order_details_for_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderDetail>, AppError>;

    async fn list_patients(&self) -> Result<Vec<Patient>, AppError>;
    async fn get_patient(&self, id: i32) -> Result<Option<Patient>, AppError>;
    async fn create_patient(&self, payload: PatientPayload) -> Result<Patient, AppError>;
    async fn update_patient(
        &self,
        id: i32,
        payload: PatientPayload,
    ) -> Result<Option<Patient>, AppError>;
    async fn delete_patient(&self, id: i32) -> Result<u64, AppError>;

    async fn list_products(&self) -> Result<Vec<Product>, AppError>;
    async fn get_product(&self, id: i32) -> Result<Option<Product>, AppError>;
    async fn create_product(&self, payload: ProductPayload) -> Result<Product, AppError>;
    async fn update_product(
        &self,
        id: i32,
        payload: ProductPayload,
    ) -> Result<Option<Product>, AppError>;
    async fn delete_product(&self, id: i32) -> Result<u64, AppError>;
}
