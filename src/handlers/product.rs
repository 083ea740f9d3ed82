// src/handlers/product.rs
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use crate::dtos::product::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::dtos::Envelope;
use crate::error::AppError;
use crate::state::AppState;

// POST /product/{supplier_id} - Create product for an existing supplier
#[instrument(skip(state, payload))]
pub async fn create_product(
    Path(supplier_id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<Json<Envelope<ProductResponse>>, AppError> {
    state
        .store
        .get_supplier(supplier_id)
        .await?
        .ok_or_else(|| AppError::not_found("Supplier not found"))?;

    let new_product = payload.into_new_product()?;
    let product = state.store.create_product(supplier_id, new_product).await?;
    info!(id = product.id, supplier_id, revenue = product.revenue, "Product created");

    Ok(Json(Envelope::ok(ProductResponse::from(product))))
}

// GET /product - List all products, 404 when there are none
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<ProductResponse>>>, AppError> {
    let products = state.store.list_products().await?;
    if products.is_empty() {
        return Err(AppError::not_found("Product not found"));
    }

    let response = products.into_iter().map(ProductResponse::from).collect();
    Ok(Json(Envelope::ok(response)))
}

// GET /product/{id}
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<ProductResponse>>, AppError> {
    let product = state
        .store
        .get_product(id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(Envelope::ok(ProductResponse::from(product))))
}

// PUT /product/{id} - Overwrite name/stock, accumulate sales, price and revenue
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<Envelope<ProductResponse>>, AppError> {
    let adjustment = payload.into_adjustment()?;
    let product = state
        .store
        .update_product(id, adjustment)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(Envelope::ok(ProductResponse::from(product))))
}

// DELETE /product/{id} - Succeeds whether or not the product exists
#[instrument(skip(state))]
pub async fn delete_product(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<()>>, AppError> {
    let removed = state.store.delete_product(id).await?;
    info!(removed, "Product delete");

    Ok(Json(Envelope::ok_empty()))
}
