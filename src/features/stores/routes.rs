use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::stores::handlers;
use crate::features::stores::services::StoreService;

/// Create routes for the stores feature
///
/// Every route requires an authenticated user.
pub fn routes(service: Arc<StoreService>) -> Router {
    Router::new()
        .route(
            "/api/stores",
            get(handlers::list_stores).post(handlers::create_store),
        )
        .route(
            "/api/stores/{store_id}",
            get(handlers::get_store)
                .patch(handlers::update_store)
                .delete(handlers::delete_store),
        )
        .with_state(service)
}
