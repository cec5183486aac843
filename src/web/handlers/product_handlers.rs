// src/web/handlers/product_handlers.rs

use actix_multipart::form::{bytes::Bytes as MultipartBytes, text::Text, MultipartForm};
use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{ImageUpload, ProductForm};
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart payload for create and update. `owner_id` is only consulted on
/// create (ownership is immutable); the optional `image` field left empty by
/// the client is treated as "no image".
#[derive(Debug, MultipartForm)]
pub struct ProductMultipartForm {
  pub owner_id: Option<Text<Uuid>>,
  pub sku: Text<String>,
  pub category: Text<String>,
  pub name: Text<String>,
  pub price: Text<Decimal>,
  pub stock: Text<i32>,
  pub description: Option<Text<String>>,
  pub image: Option<MultipartBytes>,
}

impl ProductMultipartForm {
  fn into_form(self) -> ProductForm {
    ProductForm {
      sku: self.sku.into_inner(),
      category: self.category.into_inner(),
      name: self.name.into_inner(),
      price: self.price.into_inner(),
      stock: self.stock.into_inner(),
      description: self.description.map(Text::into_inner),
      image: self.image.map(|file| ImageUpload {
        original_name: file.file_name,
        bytes: file.data.to_vec(),
      }),
    }
  }
}

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub owner_id: Uuid,
}

#[instrument(name = "handler::list_products", skip(app_state, query_params), fields(owner_id = %query_params.owner_id))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.products.list_products_by_owner(query_params.owner_id).await?;

  info!("Successfully fetched {} products.", products.len());

  Ok(HttpResponse::Ok().json(json!({
      "message": "Products fetched successfully.",
      "products": products
  })))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.products.get_product(product_id).await? {
    Some(product) => Ok(HttpResponse::Ok().json(json!({
        "message": "Product fetched successfully.",
        "product": product
    }))),
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}

#[instrument(name = "handler::create_product", skip(app_state, form))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  MultipartForm(form): MultipartForm<ProductMultipartForm>,
) -> Result<HttpResponse, AppError> {
  let owner_id = form
    .owner_id
    .as_deref()
    .copied()
    .ok_or_else(|| AppError::Validation("owner_id is required.".to_string()))?;

  let form = form.into_form();
  form.validate()?;

  let product = app_state.products.create_product(form, owner_id).await?;

  Ok(HttpResponse::Created().json(json!({
      "message": "Product created successfully.",
      "product": product
  })))
}

#[instrument(name = "handler::update_product", skip(app_state, path, form), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
  MultipartForm(form): MultipartForm<ProductMultipartForm>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  let form = form.into_form();
  form.validate()?;

  match app_state.products.update_product(product_id, form).await? {
    Some(product) => Ok(HttpResponse::Ok().json(json!({
        "message": "Product updated successfully.",
        "product": product
    }))),
    None => Err(AppError::NotFound(format!("Product with ID {} not found.", product_id))),
  }
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  if app_state.products.delete_product(product_id).await? {
    Ok(HttpResponse::NoContent().finish())
  } else {
    Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
  }
}
