// src/handlers/supplier.rs
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use crate::dtos::supplier::{SupplierRequest, SupplierResponse};
use crate::dtos::Envelope;
use crate::error::AppError;
use crate::state::AppState;

// POST /supplier - Create supplier
#[instrument(skip(state, payload))]
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<SupplierRequest>,
) -> Result<Json<Envelope<SupplierResponse>>, AppError> {
    let fields = payload.into_fields()?;
    let supplier = state.store.create_supplier(fields).await?;
    info!(id = supplier.id, "Supplier created");

    Ok(Json(Envelope::ok(SupplierResponse::from(supplier))))
}

// GET /supplier - List all suppliers, 404 when there are none
#[instrument(skip(state))]
pub async fn list_suppliers(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<SupplierResponse>>>, AppError> {
    let suppliers = state.store.list_suppliers().await?;
    if suppliers.is_empty() {
        return Err(AppError::not_found("Supplier not found"));
    }

    let response = suppliers.into_iter().map(SupplierResponse::from).collect();
    Ok(Json(Envelope::ok(response)))
}

// GET /supplier/{id}
#[instrument(skip(state))]
pub async fn get_supplier(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<SupplierResponse>>, AppError> {
    let supplier = state
        .store
        .get_supplier(id)
        .await?
        .ok_or_else(|| AppError::not_found("Supplier not found"))?;

    Ok(Json(Envelope::ok(SupplierResponse::from(supplier))))
}

// PUT /supplier/{id} - Overwrite all four fields
#[instrument(skip(state, payload))]
pub async fn update_supplier(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<SupplierRequest>,
) -> Result<Json<Envelope<SupplierResponse>>, AppError> {
    let fields = payload.into_fields()?;
    let supplier = state
        .store
        .update_supplier(id, fields)
        .await?
        .ok_or_else(|| AppError::not_found("Supplier not found"))?;

    Ok(Json(Envelope::ok(SupplierResponse::from(supplier))))
}

// DELETE /supplier/{id} - Succeeds whether or not the supplier exists
#[instrument(skip(state))]
pub async fn delete_supplier(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<Envelope<()>>, AppError> {
    let removed = state.store.delete_supplier(id).await?;
    info!(removed, "Supplier delete");

    Ok(Json(Envelope::ok_empty()))
}
