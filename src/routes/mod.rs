pub mod products;
pub mod suppliers;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{health_check, index};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .merge(suppliers::routes())
        .merge(products::routes())
}

/// Full application with middleware and state attached.
pub fn app(state: AppState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
