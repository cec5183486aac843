// src/storage/asset_store.rs

//! Flat-directory blob store for entity-owned files.
//!
//! Each stored file is named `<prefix>_<owner_uuid>[.ext]`, so the name is
//! derivable from the owning entity's id alone (modulo extension) and an
//! entity owns at most one file per prefix. Storing again under the same
//! prefix/id overwrites in place, which is the "replace image" mechanism.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use uuid::Uuid;

/// Prefix for product cover images.
pub const COVER_PREFIX: &str = "cover";
/// Prefix for student photos (parallel entity sharing the same directory).
pub const STUDENT_PREFIX: &str = "student";

#[derive(Debug, Clone)]
pub struct AssetStore {
  upload_dir: PathBuf,
}

impl AssetStore {
  pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
    Self {
      upload_dir: upload_dir.into(),
    }
  }

  pub fn upload_dir(&self) -> &Path {
    &self.upload_dir
  }

  /// Writes `data` under the deterministic name for `(prefix, owner_id)`,
  /// creating the upload directory (and parents) on demand and overwriting
  /// any existing file of the same name. Returns the stored name.
  ///
  /// The extension is taken verbatim from the last `.`-delimited segment of
  /// `original_name`; a name without a dot, or no name at all, yields a
  /// stored name without an extension.
  ///
  /// An empty payload is refused with `ErrorKind::InvalidInput` — callers are
  /// expected to treat "no bytes" as "no file" before getting here.
  #[instrument(name = "asset_store::store", skip(self, data), fields(prefix = prefix, owner_id = %owner_id))]
  pub fn store(&self, prefix: &str, data: &[u8], original_name: Option<&str>, owner_id: Uuid) -> io::Result<String> {
    if data.is_empty() {
      return Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        "refusing to store an empty payload",
      ));
    }

    let stored_name = Self::stored_name(prefix, original_name, owner_id);

    fs::create_dir_all(&self.upload_dir)?;
    fs::write(self.resolve(&stored_name), data)?;

    debug!(stored_name = %stored_name, bytes = data.len(), "Stored asset file.");
    Ok(stored_name)
  }

  /// Removes the named file. `Ok(true)` if a file was removed, `Ok(false)` if
  /// none existed; any other failure (permissions, locks) propagates.
  #[instrument(name = "asset_store::delete", skip(self))]
  pub fn delete(&self, stored_name: &str) -> io::Result<bool> {
    match fs::remove_file(self.resolve(stored_name)) {
      Ok(()) => Ok(true),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
      Err(e) => Err(e),
    }
  }

  /// Pure path composition: `<upload_dir>/<stored_name>`. No existence check.
  pub fn resolve(&self, stored_name: &str) -> PathBuf {
    self.upload_dir.join(stored_name)
  }

  pub fn exists(&self, stored_name: &str) -> bool {
    self.resolve(stored_name).exists()
  }

  fn stored_name(prefix: &str, original_name: Option<&str>, owner_id: Uuid) -> String {
    let mut stored_name = format!("{}_{}", prefix, owner_id);
    if let Some(name) = original_name {
      if let Some(idx) = name.rfind('.') {
        // Case preserved, taken verbatim including the dot.
        stored_name.push_str(&name[idx..]);
      }
    }
    stored_name
  }
}
