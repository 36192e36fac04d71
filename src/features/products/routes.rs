use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Create routes for the products feature
///
/// Reads are public; writes require an authenticated store owner.
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/api/{store_id}/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/{store_id}/products/{product_id}",
            get(handlers::get_product)
                .patch(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(service)
}
