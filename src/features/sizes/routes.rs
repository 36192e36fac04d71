use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::sizes::handlers;
use crate::features::sizes::services::SizeService;

/// Create routes for the sizes feature
///
/// Reads are public; writes require an authenticated store owner.
pub fn routes(service: Arc<SizeService>) -> Router {
    Router::new()
        .route(
            "/api/{store_id}/sizes",
            get(handlers::list_sizes).post(handlers::create_size),
        )
        .route(
            "/api/{store_id}/sizes/{size_id}",
            get(handlers::get_size)
                .patch(handlers::update_size)
                .delete(handlers::delete_size),
        )
        .with_state(service)
}
