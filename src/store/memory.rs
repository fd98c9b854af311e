//! In-memory store.
//!
//! Mirrors the PostgreSQL backend's observable semantics: generated integer
//! keys, full-row replace on update, the two-step office cascade, and the
//! kit replace collapse. Rows live in `RwLock`-guarded tables and are lost on
//! restart. Suitable for tests and single-process demo runs.
//!
//! Only the `Kit_Has_Products` key constraints are enforced here; everything
//! else (foreign keys, NOT NULL on other tables) is the real database's job
//! and is deliberately absent.

use crate::error::AppError;
use crate::models::{
    Admin, Communication, CommunicationPayload, Doctor, DoctorPayload, KitProduct,
    KitProductPayload, Office, OfficePayload, Order, OrderDetail, OrderDetailPayload,
    OrderPayload, Patient, PatientPayload, Product, ProductPayload,
};
use crate::store::{OfficeCascade, Store};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::RwLock;

#[derive(Default)]
struct Tables {
    offices: BTreeMap<i32, Office>,
    admins: BTreeMap<i32, Admin>,
    doctors: BTreeMap<i32, Doctor>,
    patients: BTreeMap<i32, Patient>,
    orders: BTreeMap<i32, Order>,
    products: BTreeMap<i32, Product>,
    communications: Vec<Communication>,
    order_details: Vec<OrderDetail>,
    kit_products: Vec<KitProduct>,
    next_office_id: i32,
    next_admin_id: i32,
    next_doctor_id: i32,
    next_patient_id: i32,
    next_order_id: i32,
    next_product_id: i32,
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an admin row directly. Admins have no create route; the table
    /// is populated out-of-band in production too.
    pub fn seed_admin(&self, first_name: &str, last_name: &str) -> Admin {
        let mut tables = self.inner.write().unwrap();
        let id = next_id(&mut tables.next_admin_id);
        let admin = Admin {
            admin_id: id,
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            email: None,
            phone: None,
        };
        tables.admins.insert(id, admin.clone());
        admin
    }

    fn insert_kit_row(
        tables: &mut Tables,
        kit_id: Option<i32>,
        product_id: Option<i32>,
    ) -> Result<KitProduct, AppError> {
        let (kit_id, product_id) = match (kit_id, product_id) {
            (Some(k), Some(p)) => (k, p),
            _ => {
                return Err(AppError::Constraint(
                    "null value in column of relation \"Kit_Has_Products\" violates not-null constraint".into(),
                ))
            }
        };
        if tables
            .kit_products
            .iter()
            .any(|row| row.kit_id == kit_id && row.product_id == product_id)
        {
            return Err(AppError::Constraint(
                "duplicate key value violates unique constraint \"Kit_Has_Products_pkey\"".into(),
            ));
        }
        let row = KitProduct { kit_id, product_id };
        tables.kit_products.push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list_offices(&self) -> Result<Vec<Office>, AppError> {
        Ok(self.inner.read().unwrap().offices.values().cloned().collect())
    }

    async fn get_office(&self, id: i32) -> Result<Option<Office>, AppError> {
        Ok(self.inner.read().unwrap().offices.get(&id).cloned())
    }

    async fn create_office(&self, payload: OfficePayload) -> Result<Office, AppError> {
        let mut tables = self.inner.write().unwrap();
        let id = next_id(&mut tables.next_office_id);
        let row = Office {
            office_id: id,
            office_name: payload.office_name,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            zip_code: payload.zip_code,
            phone: payload.phone,
            email: payload.email,
            notes: payload.notes,
        };
        tables.offices.insert(id, row.clone());
        Ok(row)
    }

    async fn update_office(
        &self,
        id: i32,
        payload: OfficePayload,
    ) -> Result<Option<Office>, AppError> {
        let mut tables = self.inner.write().unwrap();
        Ok(tables.offices.get_mut(&id).map(|row| {
            row.office_name = payload.office_name;
            row.address = payload.address;
            row.city = payload.city;
            row.state = payload.state;
            row.zip_code = payload.zip_code;
            row.phone = payload.phone;
            row.email = payload.email;
            row.notes = payload.notes;
            row.clone()
        }))
    }

    async fn delete_office(&self, id: i32) -> Result<OfficeCascade, AppError> {
        let mut tables = self.inner.write().unwrap();
        let before = tables.doctors.len();
        tables.doctors.retain(|_, d| d.office_id != Some(id));
        let doctors_deleted = (before - tables.doctors.len()) as u64;
        let offices_deleted = if tables.offices.remove(&id).is_some() { 1 } else { 0 };
        Ok(OfficeCascade {
            doctors_deleted,
            offices_deleted,
        })
    }

    async fn list_admins(&self) -> Result<Vec<Admin>, AppError> {
        Ok(self.inner.read().unwrap().admins.values().cloned().collect())
    }

    async fn get_admin(&self, id: i32) -> Result<Option<Admin>, AppError> {
        Ok(self.inner.read().unwrap().admins.get(&id).cloned())
    }

    async fn delete_admin(&self, id: i32) -> Result<u64, AppError> {
        let removed = self.inner.write().unwrap().admins.remove(&id);
        Ok(if removed.is_some() { 1 } else { 0 })
    }

    async fn list_communications_for_patient(
        &self,
        patient_id: i32,
    ) -> Result<Vec<Communication>, AppError> {
        Ok(self
            .inner
            .read()
            .unwrap()
            .communications
            .iter()
            .filter(|c| c.patient_id == Some(patient_id))
            .cloned()
            .collect())
    }

    async fn create_communication(
        &self,
        payload: CommunicationPayload,
    ) -> Result<Communication, AppError> {
        let row = Communication {
            patient_id: payload.patient_id,
            doctor_id: payload.doctor_id,
            comm_channel: payload.comm_channel,
            message_type: payload.message_type,
            date_sent: payload.date_sent,
        };
        self.inner.write().unwrap().communications.push(row.clone());
        Ok(row)
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>, AppError> {
        Ok(self.inner.read().unwrap().doctors.values().cloned().collect())
    }

    async fn get_doctor(&self, id: i32) -> Result<Option<Doctor>, AppError> {
        Ok(self.inner.read().unwrap().doctors.get(&id).cloned())
    }

    async fn create_doctor(&self, payload: DoctorPayload) -> Result<Doctor, AppError> {
        let mut tables = self.inner.write().unwrap();
        let id = next_id(&mut tables.next_doctor_id);
        let row = Doctor {
            doctor_id: id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            specialization: payload.specialization,
            phone: payload.phone,
            email: payload.email,
            office_id: payload.office_id,
        };
        tables.doctors.insert(id, row.clone());
        Ok(row)
    }

    async fn update_doctor(
        &self,
        id: i32,
        payload: DoctorPayload,
    ) -> Result<Option<Doctor>, AppError> {
        let mut tables = self.inner.write().unwrap();
        Ok(tables.doctors.get_mut(&id).map(|row| {
            row.first_name = payload.first_name;
            row.last_name = payload.last_name;
            row.specialization = payload.specialization;
            row.phone = payload.phone;
            row.email = payload.email;
            row.office_id = payload.office_id;
            row.clone()
        }))
    }

    async fn delete_doctor(&self, id: i32) -> Result<u64, AppError> {
        let removed = self.inner.write().unwrap().doctors.remove(&id);
        Ok(if removed.is_some() { 1 } else { 0 })
    }

    async fn add_kit_product(&self, payload: KitProductPayload) -> Result<KitProduct, AppError> {
        let mut tables = self.inner.write().unwrap();
        Self::insert_kit_row(&mut tables, payload.kit_id, payload.product_id)
    }

    async fn list_kit_products(&self, kit_id: i32) -> Result<Vec<KitProduct>, AppError> {
        Ok(self
            .inner
            .read()
            .unwrap()
            .kit_products
            .iter()
            .filter(|row| row.kit_id == kit_id)
            .cloned()
            .collect())
    }

    async fn replace_kit_products(
        &self,
        kit_id: i32,
        product_id: Option<i32>,
    ) -> Result<KitProduct, AppError> {
        let mut tables = self.inner.write().unwrap();
        // Delete happens first either way; a failing insert leaves the kit
        // empty, matching the non-transactional backend.
        tables.kit_products.retain(|row| row.kit_id != kit_id);
        Self::insert_kit_row(&mut tables, Some(kit_id), product_id)
    }

    async fn delete_kit(&self, kit_id: i32) -> Result<u64, AppError> {
        let mut tables = self.inner.write().unwrap();
        let before = tables.kit_products.len();
        tables.kit_products.retain(|row| row.kit_id != kit_id);
        Ok((before - tables.kit_products.len()) as u64)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.inner.read().unwrap().orders.values().cloned().collect())
    }

    async fn get_order(&self, id: i32) -> Result<Option<Order>, AppError> {
        Ok(self.inner.read().unwrap().orders.get(&id).cloned())
    }

    async fn create_order(&self, payload: OrderPayload) -> Result<Order, AppError> {
        let mut tables = self.inner.write().unwrap();
        let id = next_id(&mut tables.next_order_id);
        let row = Order {
            order_id: id,
            patient_id: payload.patient_id,
            doctor_id: payload.doctor_id,
            order_date: payload.order_date,
            status: payload.status,
            total_amount: payload.total_amount,
        };
        tables.orders.insert(id, row.clone());
        Ok(row)
    }

    async fn update_order(
        &self,
        id: i32,
        payload: OrderPayload,
    ) -> Result<Option<Order>, AppError> {
        let mut tables = self.inner.write().unwrap();
        Ok(tables.orders.get_mut(&id).map(|row| {
            row.patient_id = payload.patient_id;
            row.doctor_id = payload.doctor_id;
            row.order_date = payload.order_date;
            row.status = payload.status;
            row.total_amount = payload.total_amount;
            row.clone()
        }))
    }

    async fn delete_order(&self, id: i32) -> Result<u64, AppError> {
        let removed = self.inner.write().unwrap().orders.remove(&id);
        Ok(if removed.is_some() { 1 } else { 0 })
    }

    async fn create_order_detail(
        &self,
        payload: OrderDetailPayload,
    ) -> Result<OrderDetail, AppError> {
        let row = OrderDetail {
            order_id: payload.order_id,
            product_id: payload.product_id,
            quantity: payload.quantity,
            line_total: payload.line_total,
        };
        self.inner.write().unwrap().order_details.push(row.clone());
        Ok(row)
    }

    async fn list_order_details_for_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderDetail>, AppError> {
        Ok(self
            .inner
            .read()
            .unwrap()
            .order_details
            .iter()
            .filter(|row| row.order_id == Some(order_id))
            .cloned()
            .collect())
    }

    async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        Ok(self.inner.read().unwrap().patients.values().cloned().collect())
    }

    async fn get_patient(&self, id: i32) -> Result<Option<Patient>, AppError> {
        Ok(self.inner.read().unwrap().patients.get(&id).cloned())
    }

    async fn create_patient(&self, payload: PatientPayload) -> Result<Patient, AppError> {
        let mut tables = self.inner.write().unwrap();
        let id = next_id(&mut tables.next_patient_id);
        let row = Patient {
            patient_id: id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            date_of_birth: payload.date_of_birth,
            gender: payload.gender,
            phone: payload.phone,
            email: payload.email,
            address: payload.address,
            city: payload.city,
            state: payload.state,
            zip_code: payload.zip_code,
            office_id: payload.office_id,
        };
        tables.patients.insert(id, row.clone());
        Ok(row)
    }

    async fn update_patient(
        &self,
        id: i32,
        payload: PatientPayload,
    ) -> Result<Option<Patient>, AppError> {
        let mut tables = self.inner.write().unwrap();
        Ok(tables.patients.get_mut(&id).map(|row| {
            row.first_name = payload.first_name;
            row.last_name = payload.last_name;
            row.date_of_birth = payload.date_of_birth;
            row.gender = payload.gender;
            row.phone = payload.phone;
            row.email = payload.email;
            row.address = payload.address;
            row.city = payload.city;
            row.state = payload.state;
            row.zip_code = payload.zip_code;
            row.office_id = payload.office_id;
            row.clone()
        }))
    }

    async fn delete_patient(&self, id: i32) -> Result<u64, AppError> {
        let removed = self.inner.write().unwrap().patients.remove(&id);
        Ok(if removed.is_some() { 1 } else { 0 })
    }

    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.inner.read().unwrap().products.values().cloned().collect())
    }

    async fn get_product(&self, id: i32) -> Result<Option<Product>, AppError> {
        Ok(self.inner.read().unwrap().products.get(&id).cloned())
    }

    async fn create_product(&self, payload: ProductPayload) -> Result<Product, AppError> {
        let mut tables = self.inner.write().unwrap();
        let id = next_id(&mut tables.next_product_id);
        let row = Product {
            product_id: id,
            product_name: payload.product_name,
            category: payload.category,
            description: payload.description,
            unit_price: payload.unit_price,
            stock_quantity: payload.stock_quantity,
        };
        tables.products.insert(id, row.clone());
        Ok(row)
    }

    async fn update_product(
        &self,
        id: i32,
        payload: ProductPayload,
    ) -> Result<Option<Product>, AppError> {
        let mut tables = self.inner.write().unwrap();
        Ok(tables.products.get_mut(&id).map(|row| {
            row.product_name = payload.product_name;
            row.category = payload.category;
            row.description = payload.description;
            row.unit_price = payload.unit_price;
            row.stock_quantity = payload.stock_quantity;
            row.clone()
        }))
    }

    async fn delete_product(&self, id: i32) -> Result<u64, AppError> {
        let removed = self.inner.write().unwrap().products.remove(&id);
        Ok(if removed.is_some() { 1 } else { 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn created_product_round_trips_by_generated_id() {
        let store = MemoryStore::new();
        let created = store
            .create_product(ProductPayload {
                product_name: Some("Bandage".into()),
                category: Some("Supplies".into()),
                description: Some("Sterile".into()),
                unit_price: Some(2.50),
                stock_quantity: Some(100),
            })
            .await
            .unwrap();

        let fetched = store.get_product(created.product_id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.product_name.as_deref(), Some("Bandage"));
        assert_eq!(fetched.unit_price, Some(2.50));
        assert_eq!(fetched.stock_quantity, Some(100));
    }

    #[tokio::test]
    async fn update_is_a_full_row_replace() {
        let store = MemoryStore::new();
        let office = store
            .create_office(OfficePayload {
                office_name: Some("Downtown".into()),
                address: Some("1 Main St".into()),
                city: Some("Springfield".into()),
                phone: Some("555-0100".into()),
                ..Default::default()
            })
            .await
            .unwrap();

        // Only the name is supplied; every other column is overwritten with
        // NULL, not preserved.
        let updated = store
            .update_office(
                office.office_id,
                OfficePayload {
                    office_name: Some("Uptown".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.office_name.as_deref(), Some("Uptown"));
        assert!(updated.address.is_none());
        assert!(updated.city.is_none());
        assert!(updated.phone.is_none());
    }

    #[tokio::test]
    async fn office_delete_cascades_to_its_doctors() {
        let store = MemoryStore::new();
        let office = store.create_office(OfficePayload::default()).await.unwrap();
        let other = store.create_office(OfficePayload::default()).await.unwrap();
        for _ in 0..2 {
            store
                .create_doctor(DoctorPayload {
                    office_id: Some(office.office_id),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        let outsider = store
            .create_doctor(DoctorPayload {
                office_id: Some(other.office_id),
                ..Default::default()
            })
            .await
            .unwrap();

        let result = store.delete_office(office.office_id).await.unwrap();
        assert_eq!(result.doctors_deleted, 2);
        assert_eq!(result.offices_deleted, 1);

        assert!(store.get_office(office.office_id).await.unwrap().is_none());
        let remaining = store.list_doctors().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].doctor_id, outsider.doctor_id);
    }

    #[tokio::test]
    async fn kit_update_collapses_to_the_single_new_product() {
        let store = MemoryStore::new();
        for product in [11, 12] {
            store
                .add_kit_product(KitProductPayload {
                    kit_id: Some(1),
                    product_id: Some(product),
                })
                .await
                .unwrap();
        }

        let inserted = store.replace_kit_products(1, Some(13)).await.unwrap();
        assert_eq!(inserted.product_id, 13);

        let rows = store.list_kit_products(1).await.unwrap();
        assert_eq!(rows, vec![KitProduct { kit_id: 1, product_id: 13 }]);
    }

    #[tokio::test]
    async fn kit_replace_without_product_fails_after_the_delete() {
        let store = MemoryStore::new();
        store
            .add_kit_product(KitProductPayload {
                kit_id: Some(1),
                product_id: Some(11),
            })
            .await
            .unwrap();

        let result = store.replace_kit_products(1, None).await;
        assert!(matches!(result, Err(AppError::Constraint(_))));
        // The old rows are already gone; the failed insert does not restore
        // them.
        assert!(store.list_kit_products(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_kit_association_is_rejected() {
        let store = MemoryStore::new();
        let payload = KitProductPayload {
            kit_id: Some(3),
            product_id: Some(9),
        };
        store.add_kit_product(payload.clone()).await.unwrap();
        let result = store.add_kit_product(payload).await;
        assert!(matches!(result, Err(AppError::Constraint(_))));
    }

    #[tokio::test]
    async fn lists_are_empty_before_any_create() {
        let store = MemoryStore::new();
        assert!(store.list_offices().await.unwrap().is_empty());
        assert!(store.list_orders().await.unwrap().is_empty());
        assert!(store.list_order_details_for_order(1).await.unwrap().is_empty());
        assert!(store.list_communications_for_patient(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_by_id_misses_resolve_to_none() {
        let store = MemoryStore::new();
        assert!(store.get_patient(404).await.unwrap().is_none());
        assert!(store.get_order(404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn admins_can_only_be_read_and_deleted() {
        let store = MemoryStore::new();
        let admin = store.seed_admin("Pat", "Lee");
        assert_eq!(store.list_admins().await.unwrap().len(), 1);
        assert_eq!(store.delete_admin(admin.admin_id).await.unwrap(), 1);
        assert_eq!(store.delete_admin(admin.admin_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn communications_filter_by_patient() {
        let store = MemoryStore::new();
        for patient in [1, 1, 2] {
            store
                .create_communication(CommunicationPayload {
                    patient_id: Some(patient),
                    comm_channel: Some("email".into()),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        assert_eq!(store.list_communications_for_patient(1).await.unwrap().len(), 2);
        assert_eq!(store.list_communications_for_patient(2).await.unwrap().len(), 1);
        assert!(store.list_communications_for_patient(3).await.unwrap().is_empty());
    }
}
