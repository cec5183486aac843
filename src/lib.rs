// src/lib.rs

//! Inventory management service: product CRUD with an attached cover-image
//! lifecycle.
//!
//! The interesting part lives in two collaborating pieces:
//!  - [`storage::AssetStore`]: maps an owning entity id to at most one stored
//!    file on disk, with deterministic `<prefix>_<uuid>[.ext]` naming and
//!    idempotent delete.
//!  - [`services::ProductService`]: orchestrates row persistence against the
//!    asset store so that a product's `image_url` always names a file that
//!    exists (row first, file second — the file name needs the generated id).
//!
//! Everything else (actix handlers, config, errors) is the usual plumbing
//! around those two.

pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod storage;
pub mod web;

// --- Re-exports for the public API ---
pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::models::{NewProduct, Product};
pub use crate::repositories::{PgProductRepository, ProductRepository};
pub use crate::services::ProductService;
pub use crate::storage::AssetStore;
