use sqlx::FromRow;

use crate::error::AppError;

/// `unit_price` is `NUMERIC(12, 2)`.
pub const MAX_UNIT_PRICE: f64 = 1e10;
/// `revenue` is `NUMERIC(20, 2)`.
pub const MAX_REVENUE: f64 = 1e18;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity_in_stock: i32,
    pub quantity_sold: i32,
    pub unit_price: f64,
    pub revenue: f64,
    pub supplied_by: i64,
}

/// Rounds to whole cents the way a two-place `NUMERIC` column stores it.
fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

fn money(field: &str, amount: f64, limit: f64) -> Result<f64, AppError> {
    let amount = round_cents(amount);
    if !amount.is_finite() || amount.abs() >= limit {
        return Err(AppError::validation(format!("{field} out of range")));
    }
    Ok(amount)
}

/// Column values for a product insert. Revenue already includes the sales
/// recorded at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub quantity_in_stock: i32,
    pub quantity_sold: i32,
    pub unit_price: f64,
    pub revenue: f64,
}

impl NewProduct {
    /// Opening revenue is the caller's figure plus `quantity_sold * unit_price`.
    pub fn new(
        name: String,
        quantity_in_stock: i32,
        quantity_sold: i32,
        unit_price: f64,
        revenue: f64,
    ) -> Result<Self, AppError> {
        let unit_price = money("unit_price", unit_price, MAX_UNIT_PRICE)?;
        let revenue = money(
            "revenue",
            round_cents(revenue) + f64::from(quantity_sold) * unit_price,
            MAX_REVENUE,
        )?;
        Ok(Self { name, quantity_in_stock, quantity_sold, unit_price, revenue })
    }
}

/// A product update. `name` and `quantity_in_stock` overwrite. The other
/// three are increments.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAdjustment {
    pub name: String,
    pub quantity_in_stock: i32,
    pub quantity_sold_delta: i32,
    pub unit_price_delta: f64,
    pub revenue_delta: f64,
}

impl ProductAdjustment {
    /// Unlike creation, the incoming revenue figure is added on top of
    /// `quantity_sold * unit_price`. The two formulas are kept apart on purpose.
    pub fn new(
        name: String,
        quantity_in_stock: i32,
        quantity_sold: i32,
        unit_price: f64,
        revenue: f64,
    ) -> Self {
        let revenue_delta = f64::from(quantity_sold) * unit_price + revenue;
        Self {
            name,
            quantity_in_stock,
            quantity_sold_delta: quantity_sold,
            unit_price_delta: unit_price,
            revenue_delta,
        }
    }
}

impl Product {
    /// Leaves the product untouched when any accumulated value leaves its column range.
    pub fn apply(&mut self, adjustment: &ProductAdjustment) -> Result<(), AppError> {
        let quantity_sold = self
            .quantity_sold
            .checked_add(adjustment.quantity_sold_delta)
            .ok_or_else(|| AppError::validation("quantity_sold out of range"))?;
        let revenue = money("revenue", self.revenue + adjustment.revenue_delta, MAX_REVENUE)?;
        let unit_price = money(
            "unit_price",
            self.unit_price + adjustment.unit_price_delta,
            MAX_UNIT_PRICE,
        )?;

        self.name = adjustment.name.clone();
        self.quantity_in_stock = adjustment.quantity_in_stock;
        self.revenue = revenue;
        self.quantity_sold = quantity_sold;
        self.unit_price = unit_price;
        Ok(())
    }
}
