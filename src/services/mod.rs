// src/services/mod.rs

//! Business services coordinating repositories and file storage.

pub mod product_service;

pub use product_service::ProductService;
