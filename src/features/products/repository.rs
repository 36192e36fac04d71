use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::products::models::{Product, ProductFilter, ProductImage};
use crate::modules::persistence::{map_delete_error, map_write_error, MemoryRepository, Repository};

/// Products plus the filtered listing the storefront needs
#[async_trait]
pub trait ProductRepository: Repository<Product> {
    /// Products of the store matching `filter`, newest first
    async fn search(&self, store_id: Uuid, filter: &ProductFilter) -> Result<Vec<Product>>;
}

#[async_trait]
impl ProductRepository for MemoryRepository<Product> {
    async fn search(&self, store_id: Uuid, filter: &ProductFilter) -> Result<Vec<Product>> {
        Ok(self
            .filter(|p| p.store_id == store_id && filter.matches(p))
            .await)
    }
}

const PRODUCT_COLUMNS: &str = "id, store_id, category_id, size_id, color_id, name, price, \
                               is_featured, is_archived, created_at, updated_at";

/// Product rows and their images. Every write touches both tables inside one
/// transaction.
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads the images of `products` with a single query, in insertion order
    async fn with_images(&self, mut products: Vec<Product>) -> Result<Vec<Product>> {
        if products.is_empty() {
            return Ok(products);
        }

        let ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
        let images = sqlx::query_as::<_, ProductImage>(
            r#"
            SELECT id, product_id, url, created_at, updated_at
            FROM product_images
            WHERE product_id = ANY($1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(&ids[..])
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load product images: {:?}", e);
            AppError::Database(e)
        })?;

        let mut by_product: HashMap<Uuid, Vec<ProductImage>> = HashMap::new();
        for image in images {
            by_product.entry(image.product_id).or_default().push(image);
        }
        for product in &mut products {
            product.images = by_product.remove(&product.id).unwrap_or_default();
        }
        Ok(products)
    }

    async fn insert_images(
        tx: &mut Transaction<'_, Postgres>,
        images: &[ProductImage],
    ) -> Result<()> {
        for image in images {
            sqlx::query(
                r#"
                INSERT INTO product_images (id, product_id, url, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(image.id)
            .bind(image.product_id)
            .bind(&image.url)
            .bind(image.created_at)
            .bind(image.updated_at)
            .execute(&mut **tx)
            .await
            .map_err(map_write_error)?;
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<Product> for PgProductRepository {
    async fn insert(&self, product: Product) -> Result<Product> {
        let mut tx = self.pool.begin().await?;

        let mut saved = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products ({PRODUCT_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product.id)
        .bind(product.store_id)
        .bind(product.category_id)
        .bind(product.size_id)
        .bind(product.color_id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.is_featured)
        .bind(product.is_archived)
        .bind(product.created_at)
        .bind(product.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        Self::insert_images(&mut tx, &product.images).await?;
        tx.commit().await?;

        saved.images = product.images;
        Ok(saved)
    }

    async fn list_by_store(&self, store_id: Uuid) -> Result<Vec<Product>> {
        self.search(
            store_id,
            &ProductFilter {
                include_archived: true,
                ..Default::default()
            },
        )
        .await
    }

    async fn find(&self, store_id: Uuid, id: Uuid) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE id = $1 AND store_id = $2
            "#
        ))
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get product: {:?}", e);
            AppError::Database(e)
        })?;

        match product {
            Some(product) => Ok(self.with_images(vec![product]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn update(&self, product: Product) -> Result<Option<Product>> {
        let mut tx = self.pool.begin().await?;

        let saved = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET category_id = $1, size_id = $2, color_id = $3, name = $4, price = $5,
                is_featured = $6, is_archived = $7, updated_at = $8
            WHERE id = $9 AND store_id = $10
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product.category_id)
        .bind(product.size_id)
        .bind(product.color_id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.is_featured)
        .bind(product.is_archived)
        .bind(product.updated_at)
        .bind(product.id)
        .bind(product.store_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_write_error)?;

        let Some(mut saved) = saved else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM product_images WHERE product_id = $1")
            .bind(product.id)
            .execute(&mut *tx)
            .await
            .map_err(map_write_error)?;
        Self::insert_images(&mut tx, &product.images).await?;
        tx.commit().await?;

        saved.images = product.images;
        Ok(Some(saved))
    }

    async fn delete(&self, store_id: Uuid, id: Uuid) -> Result<Option<Product>> {
        let Some(product) = self.find(store_id, id).await? else {
            return Ok(None);
        };

        // product_images rows go with the product (ON DELETE CASCADE)
        let deleted = sqlx::query_as::<_, Product>(&format!(
            r#"
            DELETE FROM products
            WHERE id = $1 AND store_id = $2
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_delete_error("Product", e))?;

        Ok(deleted.map(|mut p| {
            p.images = product.images;
            p
        }))
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn search(&self, store_id: Uuid, filter: &ProductFilter) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE store_id = $1
              AND ($2::uuid IS NULL OR category_id = $2)
              AND ($3::uuid IS NULL OR size_id = $3)
              AND ($4::uuid IS NULL OR color_id = $4)
              AND ($5::boolean IS NULL OR is_featured = $5)
              AND ($6 OR is_archived = FALSE)
            ORDER BY created_at DESC, id DESC
            "#
        ))
        .bind(store_id)
        .bind(filter.category_id)
        .bind(filter.size_id)
        .bind(filter.color_id)
        .bind(filter.is_featured)
        .bind(filter.include_archived)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products: {:?}", e);
            AppError::Database(e)
        })?;

        self.with_images(products).await
    }
}
