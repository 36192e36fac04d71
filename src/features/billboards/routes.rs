use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::billboards::handlers;
use crate::features::billboards::services::BillboardService;

/// Create routes for the billboards feature
///
/// Reads are public; writes require an authenticated store owner.
pub fn routes(service: Arc<BillboardService>) -> Router {
    Router::new()
        .route(
            "/api/{store_id}/billboards",
            get(handlers::list_billboards).post(handlers::create_billboard),
        )
        .route(
            "/api/{store_id}/billboards/{billboard_id}",
            get(handlers::get_billboard)
                .patch(handlers::update_billboard)
                .delete(handlers::delete_billboard),
        )
        .with_state(service)
}
