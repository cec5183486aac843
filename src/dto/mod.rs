// src/dto/mod.rs

//! Inbound command shapes handed to the service layer by the web handlers.

pub mod product_form;

pub use product_form::{ImageUpload, ProductForm};
