// src/storage/mod.rs

//! Filesystem-backed asset storage.

pub mod asset_store;

pub use asset_store::{AssetStore, COVER_PREFIX, STUDENT_PREFIX};
