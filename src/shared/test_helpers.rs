use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, Method},
    middleware::Next,
    response::Response,
    Router,
};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Word;
use fake::Fake;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::core::app::AppServices;
use crate::features::auth::AuthenticatedUser;
use crate::features::billboards::dtos::{BillboardRequestDto, BillboardResponseDto};
use crate::features::categories::dtos::{CategoryRequestDto, CategoryResponseDto};
use crate::features::colors::dtos::{ColorRequestDto, ColorResponseDto};
use crate::features::products::dtos::{
    ProductImageRequestDto, ProductRequestDto, ProductResponseDto,
};
use crate::features::sizes::dtos::{SizeRequestDto, SizeResponseDto};
use crate::features::stores::dtos::{StoreRequestDto, StoreResponseDto};
use crate::shared::validation::RequestValidator;

pub fn test_user(user_id: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: user_id.to_string(),
        session_id: Some("test-session".to_string()),
    }
}

async fn inject_user_middleware(
    State(user): State<AuthenticatedUser>,
    mut request: Request,
    next: Next,
) -> Response {
    request.extensions_mut().insert(user);
    next.run(request).await
}

/// Runs every request of `router` as `user_id`, in place of the JWT middleware
pub fn with_user(router: Router, user_id: &str) -> Router {
    router.layer(axum::middleware::from_fn_with_state(
        test_user(user_id),
        inject_user_middleware,
    ))
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Ids of one category, size and color of the same store
#[derive(Debug, Clone)]
pub struct Catalog {
    pub category_id: Uuid,
    pub size_id: Uuid,
    pub color_id: Uuid,
}

/// Memory-backed services with fixture builders
pub struct TestBackend {
    pub services: AppServices,
}

impl TestBackend {
    pub fn new() -> Self {
        Self {
            services: AppServices::in_memory(Arc::new(RequestValidator::default())),
        }
    }

    #[cfg(feature = "pg-tests")]
    pub fn with_services(services: AppServices) -> Self {
        Self { services }
    }

    pub async fn store(&self, user_id: &str) -> StoreResponseDto {
        let name: String = CompanyName().fake();
        self.services
            .stores
            .create(user_id, StoreRequestDto { name })
            .await
            .unwrap()
    }

    pub async fn billboard(&self, user_id: &str, store_id: Uuid) -> BillboardResponseDto {
        let label: String = Word().fake();
        self.services
            .billboards
            .create(
                user_id,
                store_id,
                BillboardRequestDto {
                    label,
                    image_url: "https://cdn.example.com/billboard.png".to_string(),
                },
            )
            .await
            .unwrap()
    }

    pub async fn category(
        &self,
        user_id: &str,
        store_id: Uuid,
        billboard_id: Uuid,
    ) -> CategoryResponseDto {
        let name: String = Word().fake();
        self.services
            .categories
            .create(
                user_id,
                store_id,
                CategoryRequestDto {
                    name,
                    billboard_id: Some(billboard_id),
                },
            )
            .await
            .unwrap()
    }

    pub async fn size(&self, user_id: &str, store_id: Uuid) -> SizeResponseDto {
        self.services
            .sizes
            .create(
                user_id,
                store_id,
                SizeRequestDto {
                    name: "Medium".to_string(),
                    value: "M".to_string(),
                },
            )
            .await
            .unwrap()
    }

    pub async fn color(&self, user_id: &str, store_id: Uuid) -> ColorResponseDto {
        self.services
            .colors
            .create(
                user_id,
                store_id,
                ColorRequestDto {
                    name: "Navy".to_string(),
                    value: "#000080".to_string(),
                },
            )
            .await
            .unwrap()
    }

    /// A billboard, a category on it, a size and a color
    pub async fn catalog(&self, user_id: &str, store_id: Uuid) -> Catalog {
        let billboard = self.billboard(user_id, store_id).await;
        Catalog {
            category_id: self.category(user_id, store_id, billboard.id).await.id,
            size_id: self.size(user_id, store_id).await.id,
            color_id: self.color(user_id, store_id).await.id,
        }
    }

    /// A product on a fresh catalog
    pub async fn product(&self, user_id: &str, store_id: Uuid) -> ProductResponseDto {
        let catalog = self.catalog(user_id, store_id).await;
        self.product_with(
            user_id,
            store_id,
            catalog.category_id,
            catalog.size_id,
            catalog.color_id,
        )
        .await
    }

    pub async fn product_with(
        &self,
        user_id: &str,
        store_id: Uuid,
        category_id: Uuid,
        size_id: Uuid,
        color_id: Uuid,
    ) -> ProductResponseDto {
        self.services
            .products
            .create(
                user_id,
                store_id,
                ProductRequestDto {
                    name: "Test product".to_string(),
                    price: Decimal::new(2500, 2),
                    category_id: Some(category_id),
                    size_id: Some(size_id),
                    color_id: Some(color_id),
                    is_featured: false,
                    is_archived: false,
                    images: vec![ProductImageRequestDto {
                        url: "https://cdn.example.com/product.png".to_string(),
                    }],
                },
            )
            .await
            .unwrap()
    }
}
