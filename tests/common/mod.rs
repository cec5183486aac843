// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::Level;
use uuid::Uuid;

use inventory_app::dto::{ImageUpload, ProductForm};
use inventory_app::errors::Result;
use inventory_app::models::{NewProduct, Product};
use inventory_app::repositories::ProductRepository;

// --- Helper for tracing setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// In-memory stand-in for the Postgres repository. Counts persist calls so
/// tests can assert exactly how many times the service touched the store, and
/// assigns strictly increasing `created_at` timestamps so ordering assertions
/// are deterministic even for back-to-back inserts.
pub struct InMemoryProductRepository {
  rows: Mutex<HashMap<Uuid, Product>>,
  clock_seq: AtomicI64,
  pub insert_calls: AtomicUsize,
  pub save_calls: AtomicUsize,
  pub delete_calls: AtomicUsize,
}

impl InMemoryProductRepository {
  pub fn new() -> Self {
    Self {
      rows: Mutex::new(HashMap::new()),
      clock_seq: AtomicI64::new(0),
      insert_calls: AtomicUsize::new(0),
      save_calls: AtomicUsize::new(0),
      delete_calls: AtomicUsize::new(0),
    }
  }

  pub fn persist_calls(&self) -> usize {
    self.insert_calls.load(Ordering::SeqCst) + self.save_calls.load(Ordering::SeqCst)
  }

  pub fn row(&self, id: Uuid) -> Option<Product> {
    self.rows.lock().unwrap().get(&id).cloned()
  }

  pub fn len(&self) -> usize {
    self.rows.lock().unwrap().len()
  }

  /// Seeds a row directly, bypassing the call counters.
  pub fn seed(&self, product: Product) {
    self.rows.lock().unwrap().insert(product.id, product);
  }

  fn next_timestamp(&self) -> DateTime<Utc> {
    let seq = self.clock_seq.fetch_add(1, Ordering::SeqCst);
    Utc.timestamp_opt(1_700_000_000 + seq, 0).unwrap()
  }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
  async fn insert(&self, new_product: NewProduct) -> Result<Product> {
    self.insert_calls.fetch_add(1, Ordering::SeqCst);
    let now = self.next_timestamp();
    let product = Product {
      id: Uuid::new_v4(),
      user_id: new_product.user_id,
      sku: new_product.sku,
      category: new_product.category,
      name: new_product.name,
      price: new_product.price,
      stock: new_product.stock,
      description: new_product.description,
      image_url: None,
      created_at: now,
      updated_at: now,
    };
    self.rows.lock().unwrap().insert(product.id, product.clone());
    Ok(product)
  }

  async fn save(&self, product: &Product) -> Result<Product> {
    self.save_calls.fetch_add(1, Ordering::SeqCst);
    let mut updated = product.clone();
    updated.updated_at = self.next_timestamp();
    self.rows.lock().unwrap().insert(updated.id, updated.clone());
    Ok(updated)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>> {
    Ok(self.rows.lock().unwrap().get(&id).cloned())
  }

  async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Product>> {
    let mut products: Vec<Product> = self
      .rows
      .lock()
      .unwrap()
      .values()
      .filter(|p| p.user_id == owner_id)
      .cloned()
      .collect();
    products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(products)
  }

  async fn delete(&self, id: Uuid) -> Result<()> {
    self.delete_calls.fetch_add(1, Ordering::SeqCst);
    self.rows.lock().unwrap().remove(&id);
    Ok(())
  }
}

// --- Form builders ---

pub fn form_without_image(name: &str) -> ProductForm {
  ProductForm {
    sku: "SKU-100".to_string(),
    category: "Hardware".to_string(),
    name: name.to_string(),
    price: Decimal::new(2500, 2), // 25.00
    stock: 5,
    description: Some("A test product".to_string()),
    image: None,
  }
}

pub fn form_with_image(name: &str, file_name: Option<&str>, bytes: &[u8]) -> ProductForm {
  let mut form = form_without_image(name);
  form.image = Some(ImageUpload {
    original_name: file_name.map(str::to_string),
    bytes: bytes.to_vec(),
  });
  form
}
