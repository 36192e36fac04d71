use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::colors::handlers;
use crate::features::colors::services::ColorService;

/// Create routes for the colors feature
///
/// Reads are public; writes require an authenticated store owner.
pub fn routes(service: Arc<ColorService>) -> Router {
    Router::new()
        .route(
            "/api/{store_id}/colors",
            get(handlers::list_colors).post(handlers::create_color),
        )
        .route(
            "/api/{store_id}/colors/{color_id}",
            get(handlers::get_color)
                .patch(handlers::update_color)
                .delete(handlers::delete_color),
        )
        .with_state(service)
}
