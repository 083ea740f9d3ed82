// src/store/postgres.rs
use async_trait::async_trait;
use sqlx::{Error as SqlxError, PgPool};
use tracing::error;

use super::Store;
use crate::error::AppError;
use crate::models::product::{NewProduct, Product, ProductAdjustment};
use crate::models::supplier::{Supplier, SupplierFields};

const SUPPLIER_COLUMNS: &str = "id, name, company, phone, email";

const PRODUCT_COLUMNS: &str = "id, name, quantity_in_stock, quantity_sold,
                unit_price::FLOAT8 AS unit_price,
                revenue::FLOAT8    AS revenue,
                supplied_by";

/// Maps constraint failures the caller can fix to client errors. `missing_parent`
/// is the message for a foreign-key violation.
fn map_write_error(err: SqlxError, missing_parent: &str) -> AppError {
    let code = err
        .as_database_error()
        .and_then(|db_err| db_err.code())
        .map(|code| code.into_owned());
    match code.as_deref() {
        Some("23503") => AppError::not_found(missing_parent),
        Some("22001") => AppError::validation("value too long"),
        Some("22003") => AppError::validation("numeric value out of range"),
        _ => err.into(),
    }
}

#[derive(Clone)]
pub struct PgStore {
    db_pool: PgPool,
}

impl PgStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn create_supplier(&self, fields: SupplierFields) -> Result<Supplier, AppError> {
        let supplier = sqlx::query_as::<_, Supplier>(&format!(
            "INSERT INTO suppliers (name, company, phone, email)
             VALUES ($1, $2, $3, $4) RETURNING {SUPPLIER_COLUMNS}"
        ))
        .bind(&fields.name)
        .bind(&fields.company)
        .bind(&fields.phone)
        .bind(&fields.email)
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| map_write_error(e, "Supplier not found"))?;

        Ok(supplier)
    }

    async fn list_suppliers(&self) -> Result<Vec<Supplier>, AppError> {
        match sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers ORDER BY id"
        ))
        .fetch_all(&self.db_pool)
        .await
        {
            Ok(suppliers) => Ok(suppliers),
            Err(e) => {
                error!(?e, "Failed to fetch suppliers");
                Err(e.into())
            }
        }
    }

    async fn get_supplier(&self, id: i64) -> Result<Option<Supplier>, AppError> {
        let supplier = sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(supplier)
    }

    async fn update_supplier(
        &self,
        id: i64,
        fields: SupplierFields,
    ) -> Result<Option<Supplier>, AppError> {
        let supplier = sqlx::query_as::<_, Supplier>(&format!(
            "UPDATE suppliers SET
             name = $1,
             company = $2,
             phone = $3,
             email = $4
             WHERE id = $5 RETURNING {SUPPLIER_COLUMNS}"
        ))
        .bind(&fields.name)
        .bind(&fields.company)
        .bind(&fields.phone)
        .bind(&fields.email)
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await
        .map_err(|e| map_write_error(e, "Supplier not found"))?;

        Ok(supplier)
    }

    async fn delete_supplier(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn create_product(
        &self,
        supplier_id: i64,
        product: NewProduct,
    ) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products
                (name, quantity_in_stock, quantity_sold, unit_price, revenue, supplied_by)
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&product.name)
        .bind(product.quantity_in_stock)
        .bind(product.quantity_sold)
        .bind(product.unit_price)
        .bind(product.revenue)
        .bind(supplier_id)
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| map_write_error(e, "Supplier not found"))?;

        Ok(product)
    }

    async fn list_products(&self) -> Result<Vec<Product>, AppError> {
        match sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.db_pool)
        .await
        {
            Ok(products) => Ok(products),
            Err(e) => {
                error!(?e, "Failed to fetch products");
                Err(e.into())
            }
        }
    }

    async fn get_product(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(product)
    }

    async fn update_product(
        &self,
        id: i64,
        adjustment: ProductAdjustment,
    ) -> Result<Option<Product>, AppError> {
        // Increments run in SQL so concurrent updates do not lose sales.
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET
             name = $1,
             quantity_in_stock = $2,
             revenue = revenue + $3::NUMERIC,
             quantity_sold = quantity_sold + $4,
             unit_price = unit_price + $5::NUMERIC
             WHERE id = $6 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&adjustment.name)
        .bind(adjustment.quantity_in_stock)
        .bind(adjustment.revenue_delta)
        .bind(adjustment.quantity_sold_delta)
        .bind(adjustment.unit_price_delta)
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await
        .map_err(|e| map_write_error(e, "Supplier not found"))?;

        Ok(product)
    }

    async fn delete_product(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await?;

        Ok(result.rows_affected())
    }
}
