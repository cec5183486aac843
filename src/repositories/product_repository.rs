// src/repositories/product_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, instrument};
use uuid::Uuid;

use crate::errors::{AppError, Result};
use crate::models::{NewProduct, Product};

const PRODUCT_COLUMNS: &str = "id, user_id, sku, category, name, price, stock, description, image_url, created_at, updated_at";

/// Row-level operations the lifecycle manager needs from the storage engine.
/// Each method is a single atomic statement: it either fully succeeds or
/// fails with an error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// Inserts a new row; the database assigns `id` and both timestamps.
  async fn insert(&self, new_product: NewProduct) -> Result<Product>;

  /// Updates the row matching `product.id`, refreshing `updated_at`.
  /// `user_id`, `sku`, `category` and `created_at` are immutable and never
  /// written back.
  async fn save(&self, product: &Product) -> Result<Product>;

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>>;

  /// All products for one owner, most recently created first.
  async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Product>>;

  async fn delete(&self, id: Uuid) -> Result<()>;
}

/// Postgres-backed implementation using runtime queries.
#[derive(Clone)]
pub struct PgProductRepository {
  pool: PgPool,
}

impl PgProductRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
  #[instrument(name = "product_repository::insert", skip(self, new_product), fields(owner_id = %new_product.user_id))]
  async fn insert(&self, new_product: NewProduct) -> Result<Product> {
    let product: Product = sqlx::query_as(&format!(
      "INSERT INTO products (user_id, sku, category, name, price, stock, description) \
       VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(new_product.user_id)
    .bind(&new_product.sku)
    .bind(&new_product.category)
    .bind(&new_product.name)
    .bind(new_product.price)
    .bind(new_product.stock)
    .bind(&new_product.description)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| {
      error!("Failed to insert product: {}", e);
      AppError::Sqlx(e)
    })?;

    Ok(product)
  }

  #[instrument(name = "product_repository::save", skip(self, product), fields(product_id = %product.id))]
  async fn save(&self, product: &Product) -> Result<Product> {
    let updated: Product = sqlx::query_as(&format!(
      "UPDATE products SET name = $2, price = $3, stock = $4, description = $5, image_url = $6, \
       updated_at = now() WHERE id = $1 RETURNING {}",
      PRODUCT_COLUMNS
    ))
    .bind(product.id)
    .bind(&product.name)
    .bind(product.price)
    .bind(product.stock)
    .bind(&product.description)
    .bind(&product.image_url)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| {
      error!("Failed to update product {}: {}", product.id, e);
      AppError::Sqlx(e)
    })?;

    Ok(updated)
  }

  #[instrument(name = "product_repository::find_by_id", skip(self))]
  async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>> {
    let product: Option<Product> = sqlx::query_as(&format!(
      "SELECT {} FROM products WHERE id = $1",
      PRODUCT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(product)
  }

  #[instrument(name = "product_repository::find_by_owner", skip(self))]
  async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Product>> {
    let products: Vec<Product> = sqlx::query_as(&format!(
      "SELECT {} FROM products WHERE user_id = $1 ORDER BY created_at DESC",
      PRODUCT_COLUMNS
    ))
    .bind(owner_id)
    .fetch_all(&self.pool)
    .await?;

    Ok(products)
  }

  #[instrument(name = "product_repository::delete", skip(self))]
  async fn delete(&self, id: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    Ok(())
  }
}
