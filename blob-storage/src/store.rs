use crate::blob_id::BlobId;
use crate::errors::Result;

/// Identifier-addressed byte storage.
pub trait BlobStore {
    /// Persists `data` under a freshly generated identifier and returns it.
    fn create(&self, data: &[u8]) -> Result<BlobId>;

    /// Returns the full contents stored under `id`.
    fn read(&self, id: &BlobId) -> Result<Vec<u8>>;

    /// Overwrites the contents stored under `id`, which must already exist.
    fn replace(&self, id: &BlobId, data: &[u8]) -> Result<()>;

    /// Removes the contents stored under `id`, which must already exist.
    fn delete(&self, id: &BlobId) -> Result<()>;
}
