use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::billboards::{dtos as billboards_dtos, handlers as billboards_handlers};
use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::colors::{dtos as colors_dtos, handlers as colors_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::features::sizes::{dtos as sizes_dtos, handlers as sizes_handlers};
use crate::features::stores::{dtos as stores_dtos, handlers as stores_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Stores (protected)
        stores_handlers::create_store,
        stores_handlers::list_stores,
        stores_handlers::get_store,
        stores_handlers::update_store,
        stores_handlers::delete_store,
        // Billboards
        billboards_handlers::create_billboard,
        billboards_handlers::list_billboards,
        billboards_handlers::get_billboard,
        billboards_handlers::update_billboard,
        billboards_handlers::delete_billboard,
        // Categories
        categories_handlers::create_category,
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Sizes
        sizes_handlers::create_size,
        sizes_handlers::list_sizes,
        sizes_handlers::get_size,
        sizes_handlers::update_size,
        sizes_handlers::delete_size,
        // Colors
        colors_handlers::create_color,
        colors_handlers::list_colors,
        colors_handlers::get_color,
        colors_handlers::update_color,
        colors_handlers::delete_color,
        // Products
        products_handlers::create_product,
        products_handlers::list_products,
        products_handlers::get_product,
        products_handlers::update_product,
        products_handlers::delete_product,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Stores
            stores_dtos::StoreRequestDto,
            ApiResponse<stores_dtos::StoreResponseDto>,
            ApiResponse<Vec<stores_dtos::StoreResponseDto>>,
            // Billboards
            billboards_dtos::BillboardRequestDto,
            ApiResponse<billboards_dtos::BillboardResponseDto>,
            ApiResponse<Vec<billboards_dtos::BillboardResponseDto>>,
            // Categories
            categories_dtos::CategoryRequestDto,
            ApiResponse<categories_dtos::CategoryResponseDto>,
            ApiResponse<Vec<categories_dtos::CategoryResponseDto>>,
            // Sizes
            sizes_dtos::SizeRequestDto,
            ApiResponse<sizes_dtos::SizeResponseDto>,
            ApiResponse<Vec<sizes_dtos::SizeResponseDto>>,
            // Colors
            colors_dtos::ColorRequestDto,
            ApiResponse<colors_dtos::ColorResponseDto>,
            ApiResponse<Vec<colors_dtos::ColorResponseDto>>,
            // Products
            products_dtos::ProductRequestDto,
            products_dtos::ProductImageRequestDto,
            products_dtos::ProductImageResponseDto,
            ApiResponse<products_dtos::ProductResponseDto>,
            ApiResponse<Vec<products_dtos::ProductResponseDto>>,
        )
    ),
    tags(
        (name = "stores", description = "Stores owned by the caller"),
        (name = "billboards", description = "Store billboards (public reads)"),
        (name = "categories", description = "Store categories (public reads)"),
        (name = "sizes", description = "Store sizes (public reads)"),
        (name = "colors", description = "Store colors (public reads)"),
        (name = "products", description = "Store products and their images (public reads)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Store Admin API",
        version = "0.1.0",
        description = "Multi-tenant store administration API",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/stores",
            "/api/stores/{store_id}",
            "/api/{store_id}/billboards/{billboard_id}",
            "/api/{store_id}/categories/{category_id}",
            "/api/{store_id}/sizes/{size_id}",
            "/api/{store_id}/colors/{color_id}",
            "/api/{store_id}/products/{product_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Acme Admin".to_string(),
            version: "2.0.0".to_string(),
            description: "Internal".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Acme Admin");
        assert_eq!(doc.info.version, "2.0.0");
        assert!(doc.components.unwrap().security_schemes.contains_key("bearer_auth"));
    }
}
