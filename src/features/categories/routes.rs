use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
///
/// Reads are public; writes require an authenticated store owner.
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/{store_id}/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/api/{store_id}/categories/{category_id}",
            get(handlers::get_category)
                .patch(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .with_state(service)
}
