// src/services/product_service.rs

//! Product lifecycle manager.
//!
//! Owns product CRUD and keeps `image_url` consistent with the asset store.
//! The row and the file are never updated atomically; the consistency model
//! is "row is authoritative, an orphan file is a leak, not a correctness
//! violation". Concretely:
//!  - create persists the row first (the file name needs the generated id),
//!    then stores the file and persists again with `image_url` set. A storage
//!    failure between the two leaves an imageless row and propagates the
//!    error — no rollback.
//!  - replace deletes the old file by its *recorded* name before storing the
//!    new one, so an extension change cannot strand the old file.
//!  - delete removes the file before the row, ignoring "already gone".

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::dto::{ImageUpload, ProductForm};
use crate::errors::Result;
use crate::models::{NewProduct, Product};
use crate::repositories::ProductRepository;
use crate::storage::{AssetStore, COVER_PREFIX};

pub struct ProductService {
  repository: Arc<dyn ProductRepository>,
  assets: AssetStore,
}

impl ProductService {
  pub fn new(repository: Arc<dyn ProductRepository>, assets: AssetStore) -> Self {
    Self { repository, assets }
  }

  /// Creates a product for `owner_id`. When the form carries a non-empty
  /// image the row is persisted twice: once to obtain the generated id, once
  /// more with `image_url` pointing at the stored file.
  #[instrument(name = "product_service::create_product", skip(self, form), fields(owner_id = %owner_id))]
  pub async fn create_product(&self, form: ProductForm, owner_id: Uuid) -> Result<Product> {
    let ProductForm {
      sku,
      category,
      name,
      price,
      stock,
      description,
      image,
    } = form;

    let mut product = self
      .repository
      .insert(NewProduct {
        user_id: owner_id,
        sku,
        category,
        name,
        price,
        stock,
        description,
      })
      .await?;

    if let Some(image) = image.filter(|img| !img.is_empty()) {
      let stored_name = self.store_cover(&image, product.id)?;
      product.image_url = Some(stored_name);
      product = self.repository.save(&product).await?;
    }

    info!(product_id = %product.id, has_image = product.image_url.is_some(), "Product created.");
    Ok(product)
  }

  /// Updates an existing product, returning `None` (with no persist
  /// attempted) when the id has no row. `name`, `price`, `stock` and
  /// `description` are overwritten unconditionally; `image_url` only changes
  /// when a new non-empty image payload is supplied.
  #[instrument(name = "product_service::update_product", skip(self, form))]
  pub async fn update_product(&self, id: Uuid, form: ProductForm) -> Result<Option<Product>> {
    let Some(mut product) = self.repository.find_by_id(id).await? else {
      warn!("Product {} not found, nothing updated.", id);
      return Ok(None);
    };

    product.name = form.name;
    product.price = form.price;
    product.stock = form.stock;
    product.description = form.description;

    if let Some(image) = form.image.filter(|img| !img.is_empty()) {
      // Delete strictly by the recorded name: when the new upload has a
      // different extension the stored name changes, and recomputing would
      // leave the old file behind.
      if let Some(old_name) = product.image_url.as_deref() {
        let removed = self.assets.delete(old_name)?;
        if !removed {
          debug!(old_name = %old_name, "Previous image file was already gone.");
        }
      }
      let stored_name = self.store_cover(&image, product.id)?;
      product.image_url = Some(stored_name);
    }

    let updated = self.repository.save(&product).await?;
    info!(product_id = %updated.id, "Product updated.");
    Ok(Some(updated))
  }

  /// Deletes a product and its image file, if any. Returns `false` when the
  /// id has no row (no file delete attempted either).
  #[instrument(name = "product_service::delete_product", skip(self))]
  pub async fn delete_product(&self, id: Uuid) -> Result<bool> {
    let Some(product) = self.repository.find_by_id(id).await? else {
      warn!("Product {} not found, nothing deleted.", id);
      return Ok(false);
    };

    // File first, row second. A failed row delete can leave an orphan file;
    // acceptable per the consistency model above.
    if let Some(stored_name) = product.image_url.as_deref() {
      let removed = self.assets.delete(stored_name)?;
      if !removed {
        debug!(stored_name = %stored_name, "Image file was already gone.");
      }
    }
    self.repository.delete(product.id).await?;

    info!(product_id = %product.id, "Product deleted.");
    Ok(true)
  }

  #[instrument(name = "product_service::get_product", skip(self))]
  pub async fn get_product(&self, id: Uuid) -> Result<Option<Product>> {
    self.repository.find_by_id(id).await
  }

  #[instrument(name = "product_service::list_products_by_owner", skip(self))]
  pub async fn list_products_by_owner(&self, owner_id: Uuid) -> Result<Vec<Product>> {
    self.repository.find_by_owner(owner_id).await
  }

  fn store_cover(&self, image: &ImageUpload, product_id: Uuid) -> Result<String> {
    let stored_name = self
      .assets
      .store(COVER_PREFIX, &image.bytes, image.original_name.as_deref(), product_id)?;
    Ok(stored_name)
  }
}
