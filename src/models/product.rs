// src/models/product.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A product row. `image_url` is the stored-file name in the asset store
/// (`cover_<id>[.ext]`), not a full URL; `None` means "no image".
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
  pub id: Uuid,
  pub user_id: Uuid,
  pub sku: String,
  pub category: String,
  pub name: String,
  pub price: Decimal,
  pub stock: i32,
  pub description: Option<String>, // Description can be optional
  pub image_url: Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Insert payload for a product. `id` and the timestamps are assigned by the
/// database on first persist; the image is attached afterwards because its
/// stored name derives from the generated id.
#[derive(Debug, Clone)]
pub struct NewProduct {
  pub user_id: Uuid,
  pub sku: String,
  pub category: String,
  pub name: String,
  pub price: Decimal,
  pub stock: i32,
  pub description: Option<String>,
}
