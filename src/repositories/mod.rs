// src/repositories/mod.rs

//! Persistence seam between the service layer and the storage engine.

pub mod product_repository;

pub use product_repository::{PgProductRepository, ProductRepository};
