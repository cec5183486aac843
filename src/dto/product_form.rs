// src/dto/product_form.rs

use rust_decimal::Decimal;

use crate::errors::AppError;

/// Raw uploaded file payload: the bytes plus whatever filename the client
/// supplied (used only for its extension).
#[derive(Debug, Clone)]
pub struct ImageUpload {
  pub original_name: Option<String>,
  pub bytes: Vec<u8>,
}

impl ImageUpload {
  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }
}

/// Create/update command for a product. Business-rule validation happens here,
/// before the service is invoked; the service itself only re-checks image
/// emptiness. `sku` and `category` are set at creation and ignored by update.
#[derive(Debug, Clone)]
pub struct ProductForm {
  pub sku: String,
  pub category: String,
  pub name: String,
  pub price: Decimal,
  pub stock: i32,
  pub description: Option<String>,
  pub image: Option<ImageUpload>,
}

impl ProductForm {
  pub fn validate(&self) -> Result<(), AppError> {
    if self.sku.trim().is_empty() {
      return Err(AppError::Validation("SKU is required.".to_string()));
    }
    if self.category.trim().is_empty() {
      return Err(AppError::Validation("Category is required.".to_string()));
    }
    if self.name.trim().is_empty() {
      return Err(AppError::Validation("Product name is required.".to_string()));
    }
    if self.price < Decimal::ONE {
      return Err(AppError::Validation("Price must be at least 1.".to_string()));
    }
    if self.stock < 0 {
      return Err(AppError::Validation("Stock cannot be negative.".to_string()));
    }
    Ok(())
  }

  /// The uploaded image, if one was supplied and it actually has content.
  /// An empty payload (e.g. a file input left blank on submit) counts as
  /// "no image".
  pub fn image(&self) -> Option<&ImageUpload> {
    self.image.as_ref().filter(|img| !img.is_empty())
  }
}
