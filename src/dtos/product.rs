// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::product::{NewProduct, Product, ProductAdjustment};

// Width of products.name.
const NAME_MAX: usize = 50;

fn check_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Product name is required"));
    }
    if name.chars().count() > NAME_MAX {
        return Err(AppError::validation(format!(
            "Product name must be at most {NAME_MAX} characters"
        )));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub quantity_in_stock: Option<i32>,
    pub quantity_sold: Option<i32>,
    pub unit_price: Option<f64>,
    pub revenue: Option<f64>,
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> Result<NewProduct, AppError> {
        check_name(&self.name)?;

        NewProduct::new(
            self.name,
            self.quantity_in_stock.unwrap_or(0),
            self.quantity_sold.unwrap_or(0),
            self.unit_price.unwrap_or(0.0),
            self.revenue.unwrap_or(0.0),
        )
    }
}

/// PUT body. All five fields must be present.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub quantity_in_stock: i32,
    pub quantity_sold: i32,
    pub unit_price: f64,
    pub revenue: f64,
}

impl UpdateProductRequest {
    pub fn into_adjustment(self) -> Result<ProductAdjustment, AppError> {
        check_name(&self.name)?;

        Ok(ProductAdjustment::new(
            self.name,
            self.quantity_in_stock,
            self.quantity_sold,
            self.unit_price,
            self.revenue,
        ))
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub quantity_in_stock: i32,
    pub quantity_sold: i32,
    pub unit_price: f64,
    pub revenue: f64,
    pub supplied_by: i64,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity_in_stock: product.quantity_in_stock,
            quantity_sold: product.quantity_sold,
            unit_price: product.unit_price,
            revenue: product.revenue,
            supplied_by: product.supplied_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_numbers_default_to_zero_on_create() {
        let req: CreateProductRequest = serde_json::from_str(r#"{"name":"bolt"}"#).unwrap();
        let new = req.into_new_product().unwrap();
        assert_eq!(new.quantity_in_stock, 0);
        assert_eq!(new.quantity_sold, 0);
        assert_eq!(new.unit_price, 0.0);
        assert_eq!(new.revenue, 0.0);
    }

    #[test]
    fn name_is_stored_as_sent() {
        let req: CreateProductRequest = serde_json::from_str(r#"{"name":" bolt "}"#).unwrap();
        assert_eq!(req.into_new_product().unwrap().name, " bolt ");
    }

    #[test]
    fn over_long_name_is_rejected() {
        let req = UpdateProductRequest {
            name: "x".repeat(NAME_MAX + 1),
            quantity_in_stock: 0,
            quantity_sold: 0,
            unit_price: 0.0,
            revenue: 0.0,
        };
        assert!(matches!(req.into_adjustment(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn update_requires_every_field() {
        let body = r#"{"name":"bolt","quantity_in_stock":3,"quantity_sold":1,"unit_price":1.0}"#;
        assert!(serde_json::from_str::<UpdateProductRequest>(body).is_err());
    }
}
