// src/state.rs
use crate::config::AppConfig;
use crate::services::ProductService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub products: Arc<ProductService>,
  pub config: Arc<AppConfig>, // Share loaded config
}
