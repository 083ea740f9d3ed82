// src/dtos/supplier.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::supplier::{Supplier, SupplierFields};

// Column widths of the suppliers table.
const NAME_MAX: usize = 50;
const COMPANY_MAX: usize = 50;
const PHONE_MAX: usize = 30;
const EMAIL_MAX: usize = 100;

/// Body for both POST and PUT. Every field is required, so a PUT that omits
/// one is rejected before any write happens.
#[derive(Debug, Deserialize)]
pub struct SupplierRequest {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}

impl SupplierRequest {
    /// Values are stored exactly as sent; only blank or over-long ones are refused.
    pub fn into_fields(self) -> Result<SupplierFields, AppError> {
        for (field, value, max) in [
            ("name", &self.name, NAME_MAX),
            ("company", &self.company, COMPANY_MAX),
            ("phone", &self.phone, PHONE_MAX),
            ("email", &self.email, EMAIL_MAX),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("Supplier {field} is required")));
            }
            if value.chars().count() > max {
                return Err(AppError::validation(format!(
                    "Supplier {field} must be at most {max} characters"
                )));
            }
        }

        Ok(SupplierFields {
            name: self.name,
            company: self.company,
            phone: self.phone,
            email: self.email,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SupplierResponse {
    pub id: i64,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}

impl From<Supplier> for SupplierResponse {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            company: supplier.company,
            phone: supplier.phone,
            email: supplier.email,
        }
    }
}
