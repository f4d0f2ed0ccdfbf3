pub mod blob_id;
pub mod errors;
pub mod local_store;
pub mod store;

pub use blob_id::BlobId;
pub use errors::{Result, StoreError};
pub use local_store::LocalFileBlobStore;
pub use store::BlobStore;
