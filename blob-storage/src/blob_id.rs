use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Identifier addressing exactly one stored blob.
///
/// Rendered as the canonical lowercase hyphenated form, e.g.
/// `550e8400-e29b-41d4-a716-446655440000`. Parsing accepts only that
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlobId(Uuid);

#[derive(Debug, Error)]
#[error("not a canonical blob identifier")]
pub struct ParseBlobIdError;

impl BlobId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// File name for this blob under the storage root.
    pub fn file_name(&self) -> String {
        format!("{}.bin", self.0)
    }
}

impl fmt::Display for BlobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BlobId {
    type Err = ParseBlobIdError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let uuid = Uuid::try_parse(s).map_err(|_| ParseBlobIdError)?;
        // Uuid::try_parse also accepts uppercase, braced, urn and simple
        // forms; only the canonical rendering addresses a blob.
        if uuid.to_string() != s {
            return Err(ParseBlobIdError);
        }
        Ok(Self(uuid))
    }
}
