// src/store/mod.rs
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::product::{NewProduct, Product, ProductAdjustment};
use crate::models::supplier::{Supplier, SupplierFields};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence for suppliers and products.
///
/// Lookups return `Ok(None)` for a missing row. Deletes report the number of rows removed
/// and never fail on a missing id. Deleting a supplier also removes its products.
#[async_trait]
pub trait Store: Send + Sync {
    async fn create_supplier(&self, fields: SupplierFields) -> Result<Supplier, AppError>;
    async fn list_suppliers(&self) -> Result<Vec<Supplier>, AppError>;
    async fn get_supplier(&self, id: i64) -> Result<Option<Supplier>, AppError>;
    async fn update_supplier(
        &self,
        id: i64,
        fields: SupplierFields,
    ) -> Result<Option<Supplier>, AppError>;
    async fn delete_supplier(&self, id: i64) -> Result<u64, AppError>;

    /// Fails with `NotFound` when `supplier_id` does not reference a supplier.
    async fn create_product(
        &self,
        supplier_id: i64,
        product: NewProduct,
    ) -> Result<Product, AppError>;
    async fn list_products(&self) -> Result<Vec<Product>, AppError>;
    async fn get_product(&self, id: i64) -> Result<Option<Product>, AppError>;
    /// Fails with `ValidationError` when an accumulated value leaves its column range.
    async fn update_product(
        &self,
        id: i64,
        adjustment: ProductAdjustment,
    ) -> Result<Option<Product>, AppError>;
    async fn delete_product(&self, id: i64) -> Result<u64, AppError>;
}
