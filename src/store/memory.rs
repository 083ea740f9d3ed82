// src/store/memory.rs
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Store;
use crate::error::AppError;
use crate::models::product::{NewProduct, Product, ProductAdjustment};
use crate::models::supplier::{Supplier, SupplierFields};

#[derive(Default)]
struct Tables {
    suppliers: BTreeMap<i64, Supplier>,
    products: BTreeMap<i64, Product>,
    next_supplier_id: i64,
    next_product_id: i64,
}

/// In-process store. Cascades supplier deletes and keeps money to cents like
/// `PgStore`. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(counter: &mut i64) -> Result<i64, AppError> {
    *counter = counter
        .checked_add(1)
        .ok_or_else(|| AppError::internal("id sequence exhausted"))?;
    Ok(*counter)
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_supplier(&self, fields: SupplierFields) -> Result<Supplier, AppError> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.next_supplier_id)?;
        let supplier = Supplier {
            id,
            name: fields.name,
            company: fields.company,
            phone: fields.phone,
            email: fields.email,
        };
        tables.suppliers.insert(supplier.id, supplier.clone());
        Ok(supplier)
    }

    async fn list_suppliers(&self) -> Result<Vec<Supplier>, AppError> {
        Ok(self.tables.read().await.suppliers.values().cloned().collect())
    }

    async fn get_supplier(&self, id: i64) -> Result<Option<Supplier>, AppError> {
        Ok(self.tables.read().await.suppliers.get(&id).cloned())
    }

    async fn update_supplier(
        &self,
        id: i64,
        fields: SupplierFields,
    ) -> Result<Option<Supplier>, AppError> {
        let mut tables = self.tables.write().await;
        let Some(supplier) = tables.suppliers.get_mut(&id) else {
            return Ok(None);
        };
        supplier.name = fields.name;
        supplier.company = fields.company;
        supplier.phone = fields.phone;
        supplier.email = fields.email;
        Ok(Some(supplier.clone()))
    }

    async fn delete_supplier(&self, id: i64) -> Result<u64, AppError> {
        let mut tables = self.tables.write().await;
        if tables.suppliers.remove(&id).is_none() {
            return Ok(0);
        }
        tables.products.retain(|_, p| p.supplied_by != id);
        Ok(1)
    }

    async fn create_product(
        &self,
        supplier_id: i64,
        product: NewProduct,
    ) -> Result<Product, AppError> {
        let mut tables = self.tables.write().await;
        if !tables.suppliers.contains_key(&supplier_id) {
            return Err(AppError::not_found("Supplier not found"));
        }
        let id = next_id(&mut tables.next_product_id)?;
        let product = Product {
            id,
            name: product.name,
            quantity_in_stock: product.quantity_in_stock,
            quantity_sold: product.quantity_sold,
            unit_price: product.unit_price,
            revenue: product.revenue,
            supplied_by: supplier_id,
        };
        tables.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.tables.read().await.products.values().cloned().collect())
    }

    async fn get_product(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.tables.read().await.products.get(&id).cloned())
    }

    async fn update_product(
        &self,
        id: i64,
        adjustment: ProductAdjustment,
    ) -> Result<Option<Product>, AppError> {
        let mut tables = self.tables.write().await;
        let Some(product) = tables.products.get_mut(&id) else {
            return Ok(None);
        };
        product.apply(&adjustment)?;
        Ok(Some(product.clone()))
    }

    async fn delete_product(&self, id: i64) -> Result<u64, AppError> {
        let removed = self.tables.write().await.products.remove(&id);
        Ok(u64::from(removed.is_some()))
    }
}
