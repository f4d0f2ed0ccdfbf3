use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::blob_id::BlobId;
use crate::errors::{Result, StoreError};
use crate::store::BlobStore;

/// Stores each blob as a single `<id>.bin` file directly under `base_path`.
pub struct LocalFileBlobStore {
    base_path: PathBuf,
}

impl LocalFileBlobStore {
    /// Creates the base directory if it does not exist yet.
    pub fn new(base_path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn blob_path(&self, id: &BlobId) -> PathBuf {
        self.base_path.join(id.file_name())
    }

    // Writes to a uniquely named temp file, then renames it over `path`, so
    // a concurrent reader sees either the old bytes or the new bytes in
    // full, never a partial write.
    fn write_atomic(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        let tmp_path = self.base_path.join(format!("{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, data)?;
        if let Err(err) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }
        Ok(())
    }
}

impl BlobStore for LocalFileBlobStore {
    fn create(&self, data: &[u8]) -> Result<BlobId> {
        let id = BlobId::generate();
        self.write_atomic(&self.blob_path(&id), data)?;
        Ok(id)
    }

    fn read(&self, id: &BlobId) -> Result<Vec<u8>> {
        match fs::read(self.blob_path(id)) {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StoreError::NotFound),
            Err(err) => Err(err.into()),
        }
    }

    fn replace(&self, id: &BlobId, data: &[u8]) -> Result<()> {
        let path = self.blob_path(id);
        if !path.is_file() {
            return Err(StoreError::NotFound);
        }
        self.write_atomic(&path, data)?;
        Ok(())
    }

    fn delete(&self, id: &BlobId) -> Result<()> {
        match fs::remove_file(self.blob_path(id)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(StoreError::NotFound),
            Err(err) => Err(err.into()),
        }
    }
}
