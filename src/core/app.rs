//! Service wiring
//!
//! Builds one service per resource over a chosen persistence backend and
//! merges their routers. The cascade relations live here: every
//! [`ReferenceGuard`] is assembled from the counters of the tables that point
//! at the parent.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::billboards::models::Billboard;
use crate::features::billboards::{
    routes as billboards_routes, BillboardService, PgBillboardRepository,
};
use crate::features::categories::models::Category;
use crate::features::categories::{
    routes as categories_routes, CategoryService, PgCategoryRepository,
};
use crate::features::colors::models::Color;
use crate::features::colors::{routes as colors_routes, ColorService, PgColorRepository};
use crate::features::products::models::Product;
use crate::features::products::{
    routes as products_routes, PgProductRepository, ProductReferences, ProductRepository,
    ProductService,
};
use crate::features::sizes::models::Size;
use crate::features::sizes::{routes as sizes_routes, PgSizeRepository, SizeService};
use crate::features::stores::models::Store;
use crate::features::stores::{
    routes as stores_routes, OwnershipGuard, PgStoreRepository, StoreRepository, StoreService,
};
use crate::modules::persistence::{
    DependentCounter, MemoryReferences, MemoryRepository, PgReferences, Record, ReferenceGuard,
    Repository,
};
use crate::shared::validation::RequestValidator;

pub struct AppServices {
    pub stores: Arc<StoreService>,
    pub billboards: Arc<BillboardService>,
    pub categories: Arc<CategoryService>,
    pub sizes: Arc<SizeService>,
    pub colors: Arc<ColorService>,
    pub products: Arc<ProductService>,
}

/// Repositories of one backend plus the dependent counters per parent
struct Backend {
    stores: Arc<dyn StoreRepository>,
    billboards: Arc<dyn Repository<Billboard>>,
    categories: Arc<dyn Repository<Category>>,
    sizes: Arc<dyn Repository<Size>>,
    colors: Arc<dyn Repository<Color>>,
    products: Arc<dyn ProductRepository>,
    store_dependents: ReferenceGuard,
    billboard_dependents: ReferenceGuard,
    category_dependents: ReferenceGuard,
    size_dependents: ReferenceGuard,
    color_dependents: ReferenceGuard,
}

fn memory_counter<T: Record>(
    rows: &Arc<MemoryRepository<T>>,
    dependent: &'static str,
    key: fn(&T) -> Uuid,
) -> Arc<dyn DependentCounter> {
    Arc::new(MemoryReferences::new(Arc::clone(rows), dependent, key))
}

impl AppServices {
    pub fn postgres(pool: PgPool, validator: Arc<RequestValidator>) -> Self {
        let counter = |table: &'static str, column: &'static str| -> Arc<dyn DependentCounter> {
            Arc::new(PgReferences::new(pool.clone(), table, column))
        };

        let backend = Backend {
            stores: Arc::new(PgStoreRepository::new(pool.clone())),
            billboards: Arc::new(PgBillboardRepository::new(pool.clone())),
            categories: Arc::new(PgCategoryRepository::new(pool.clone())),
            sizes: Arc::new(PgSizeRepository::new(pool.clone())),
            colors: Arc::new(PgColorRepository::new(pool.clone())),
            products: Arc::new(PgProductRepository::new(pool.clone())),
            store_dependents: ReferenceGuard::new(vec![
                counter("billboards", "store_id"),
                counter("categories", "store_id"),
                counter("sizes", "store_id"),
                counter("colors", "store_id"),
                counter("products", "store_id"),
            ]),
            billboard_dependents: ReferenceGuard::new(vec![counter("categories", "billboard_id")]),
            category_dependents: ReferenceGuard::new(vec![counter("products", "category_id")]),
            size_dependents: ReferenceGuard::new(vec![counter("products", "size_id")]),
            color_dependents: ReferenceGuard::new(vec![counter("products", "color_id")]),
        };

        Self::assemble(backend, validator)
    }

    /// Process-local backend; nothing survives a restart
    pub fn in_memory(validator: Arc<RequestValidator>) -> Self {
        let stores = Arc::new(MemoryRepository::<Store>::new());
        let billboards = Arc::new(MemoryRepository::<Billboard>::new());
        let categories = Arc::new(MemoryRepository::<Category>::new());
        let sizes = Arc::new(MemoryRepository::<Size>::new());
        let colors = Arc::new(MemoryRepository::<Color>::new());
        let products = Arc::new(MemoryRepository::<Product>::new());

        let store_dependents = ReferenceGuard::new(vec![
            memory_counter(&billboards, "billboards", |b| b.store_id),
            memory_counter(&categories, "categories", |c| c.store_id),
            memory_counter(&sizes, "sizes", |s| s.store_id),
            memory_counter(&colors, "colors", |c| c.store_id),
            memory_counter(&products, "products", |p| p.store_id),
        ]);
        let billboard_dependents =
            ReferenceGuard::new(vec![memory_counter(&categories, "categories", |c| {
                c.billboard_id
            })]);
        let category_dependents =
            ReferenceGuard::new(vec![memory_counter(&products, "products", |p| p.category_id)]);
        let size_dependents =
            ReferenceGuard::new(vec![memory_counter(&products, "products", |p| p.size_id)]);
        let color_dependents =
            ReferenceGuard::new(vec![memory_counter(&products, "products", |p| p.color_id)]);

        let backend = Backend {
            stores,
            billboards,
            categories,
            sizes,
            colors,
            products,
            store_dependents,
            billboard_dependents,
            category_dependents,
            size_dependents,
            color_dependents,
        };

        Self::assemble(backend, validator)
    }

    fn assemble(backend: Backend, validator: Arc<RequestValidator>) -> Self {
        let guard = OwnershipGuard::new(Arc::clone(&backend.stores));

        let stores = Arc::new(StoreService::new(
            backend.stores,
            backend.store_dependents,
            Arc::clone(&validator),
        ));
        let billboards = Arc::new(BillboardService::new(
            Arc::clone(&backend.billboards),
            guard.clone(),
            backend.billboard_dependents,
            Arc::clone(&validator),
        ));
        let categories = Arc::new(CategoryService::new(
            Arc::clone(&backend.categories),
            backend.billboards,
            guard.clone(),
            backend.category_dependents,
            Arc::clone(&validator),
        ));
        let sizes = Arc::new(SizeService::new(
            Arc::clone(&backend.sizes),
            guard.clone(),
            backend.size_dependents,
            Arc::clone(&validator),
        ));
        let colors = Arc::new(ColorService::new(
            Arc::clone(&backend.colors),
            guard.clone(),
            backend.color_dependents,
            Arc::clone(&validator),
        ));
        let products = Arc::new(ProductService::new(
            backend.products,
            ProductReferences {
                categories: backend.categories,
                sizes: backend.sizes,
                colors: backend.colors,
            },
            guard,
            validator,
        ));

        Self {
            stores,
            billboards,
            categories,
            sizes,
            colors,
            products,
        }
    }

    /// Routes of every resource. Authentication is layered on by the caller.
    pub fn router(&self) -> Router {
        Router::new()
            .merge(stores_routes::routes(Arc::clone(&self.stores)))
            .merge(billboards_routes::routes(Arc::clone(&self.billboards)))
            .merge(categories_routes::routes(Arc::clone(&self.categories)))
            .merge(sizes_routes::routes(Arc::clone(&self.sizes)))
            .merge(colors_routes::routes(Arc::clone(&self.colors)))
            .merge(products_routes::routes(Arc::clone(&self.products)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::stores::services::STORE_ACCESS_DENIED;
    use crate::shared::test_helpers::{json_request, read_json, with_user, TestBackend};
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(backend: &TestBackend, user: Option<&str>) -> Router {
        let router = backend.services.router();
        match user {
            Some(user_id) => with_user(router, user_id),
            None => router,
        }
    }

    async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        (status, read_json(response).await)
    }

    #[tokio::test]
    async fn test_size_lifecycle_with_product_reference() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;
        let uri = format!("/api/{}/sizes", store.id);

        let (status, body) = send(
            app(&backend, Some("user_a")),
            json_request(Method::POST, &uri, json!({"name": "Pequeno", "value": "S"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["value"], "S");
        let size_id = body["data"]["id"].as_str().unwrap().to_string();

        let catalog = backend.catalog("user_a", store.id).await;
        let product = backend
            .product_with(
                "user_a",
                store.id,
                catalog.category_id,
                size_id.parse().unwrap(),
                catalog.color_id,
            )
            .await;

        let size_uri = format!("{}/{}", uri, size_id);
        let delete = || {
            Request::builder()
                .method(Method::DELETE)
                .uri(size_uri.as_str())
                .body(Body::empty())
                .unwrap()
        };

        let (status, body) = send(app(&backend, Some("user_a")), delete()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);

        let product_uri = format!("/api/{}/products/{}", store.id, product.id);
        let (status, _) = send(
            app(&backend, Some("user_a")),
            Request::builder()
                .method(Method::DELETE)
                .uri(product_uri.as_str())
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(app(&backend, Some("user_a")), delete()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], size_id.as_str());
    }

    #[tokio::test]
    async fn test_mutation_without_user_is_unauthorized() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;

        let (status, body) = send(
            app(&backend, None),
            json_request(
                Method::POST,
                &format!("/api/{}/colors", store.id),
                json!({"name": "Red", "value": "#ff0000"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_public_reads_need_no_user() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;
        backend.color("user_a", store.id).await;

        let (status, body) = send(
            app(&backend, None),
            Request::builder()
                .uri(format!("/api/{}/colors", store.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["meta"]["total"], 1);
    }

    #[tokio::test]
    async fn test_foreign_store_is_forbidden_and_persists_nothing() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;

        let (status, body) = send(
            app(&backend, Some("user_b")),
            json_request(
                Method::POST,
                &format!("/api/{}/billboards", store.id),
                json!({"label": "Sale", "image_url": "https://cdn.example.com/a.png"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], STORE_ACCESS_DENIED);
        assert!(backend
            .services
            .billboards
            .list(store.id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;

        let (status, body) = send(
            app(&backend, Some("user_a")),
            json_request(
                Method::POST,
                &format!("/api/{}/sizes", store.id),
                json!({"name": "Pequeno"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "value is required");
        assert!(backend.services.sizes.list(store.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_store_id_is_bad_request() {
        let backend = TestBackend::new();

        let (status, body) = send(
            app(&backend, Some("user_a")),
            json_request(
                Method::POST,
                "/api/not-a-uuid/sizes",
                json!({"name": "Pequeno", "value": "S"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_unknown_resource_id_is_not_found() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;

        let (status, _) = send(
            app(&backend, None),
            Request::builder()
                .uri(format!("/api/{}/categories/{}", store.id, Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_billboard_delete_conflicts_with_category() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;
        let billboard = backend.billboard("user_a", store.id).await;
        backend.category("user_a", store.id, billboard.id).await;

        let (status, body) = send(
            app(&backend, Some("user_a")),
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/api/{}/billboards/{}", store.id, billboard.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["message"].as_str().unwrap().contains("categories"));
    }

    #[tokio::test]
    async fn test_store_routes_list_only_own_stores() {
        let backend = TestBackend::new();
        let own = backend.store("user_a").await;
        backend.store("user_b").await;

        let (status, body) = send(
            app(&backend, Some("user_a")),
            Request::builder()
                .uri("/api/stores")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let stores = body["data"].as_array().unwrap();
        assert_eq!(stores.len(), 1);
        assert_eq!(stores[0]["id"], own.id.to_string());
    }

    #[tokio::test]
    async fn test_product_price_round_trips_as_decimal() {
        let backend = TestBackend::new();
        let store = backend.store("user_a").await;
        let catalog = backend.catalog("user_a", store.id).await;

        let (status, body) = send(
            app(&backend, Some("user_a")),
            json_request(
                Method::POST,
                &format!("/api/{}/products", store.id),
                json!({
                    "name": "Linen shirt",
                    "price": "19.99",
                    "category_id": catalog.category_id,
                    "size_id": catalog.size_id,
                    "color_id": catalog.color_id,
                    "images": [{"url": "https://cdn.example.com/shirt.png"}]
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        assert_eq!(body["data"]["price"], "19.99");
        assert_eq!(body["data"]["is_archived"], false);
        assert_eq!(
            body["data"]["images"][0]["url"],
            "https://cdn.example.com/shirt.png"
        );
    }
}
