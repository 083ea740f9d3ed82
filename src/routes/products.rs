use axum::{
    routing::get,
    Router,
};
use crate::handlers::product::{
    create_product, delete_product, get_product, list_products, update_product
};
use crate::state::AppState;

// POST takes the supplier id in the same segment the other methods use for the
// product id, so they share one route.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/product", get(list_products))
        .route(
            "/product/{id}",
            get(get_product).post(create_product).put(update_product).delete(delete_product),
        )
}
