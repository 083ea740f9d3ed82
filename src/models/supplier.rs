use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}

/// Column values for an insert or a full overwrite.
#[derive(Debug, Clone)]
pub struct SupplierFields {
    pub name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
}
