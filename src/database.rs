// src/database.rs
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

const CREATE_SUPPLIERS: &str = r#"CREATE TABLE IF NOT EXISTS suppliers (
    id      BIGSERIAL PRIMARY KEY,
    name    VARCHAR(50)  NOT NULL,
    company VARCHAR(50)  NOT NULL,
    phone   VARCHAR(30)  NOT NULL,
    email   VARCHAR(100) NOT NULL
)"#;

const CREATE_PRODUCTS: &str = r#"CREATE TABLE IF NOT EXISTS products (
    id                BIGSERIAL PRIMARY KEY,
    name              VARCHAR(50)    NOT NULL,
    quantity_in_stock INTEGER        NOT NULL DEFAULT 0,
    quantity_sold     INTEGER        NOT NULL DEFAULT 0,
    unit_price        NUMERIC(12, 2) NOT NULL DEFAULT 0,
    revenue           NUMERIC(20, 2) NOT NULL DEFAULT 0,
    supplied_by       BIGINT         NOT NULL REFERENCES suppliers (id) ON DELETE CASCADE
)"#;

const CREATE_PRODUCTS_SUPPLIER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS products_supplied_by_idx ON products (supplied_by)";

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Creates the tables if they are missing. Existing tables are left alone.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_SUPPLIERS, CREATE_PRODUCTS, CREATE_PRODUCTS_SUPPLIER_INDEX] {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema ready");
    Ok(())
}
