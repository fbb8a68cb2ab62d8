//! Bucket data structure.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use super::keystore::KeyStore;

/// A bucket and its objects.
///
/// Objects sit behind a `parking_lot::RwLock`: listings and reads share the
/// lock, writes take it exclusively.
pub struct S3Bucket {
    /// Bucket name.
    pub name: String,
    /// When the bucket was created.
    pub creation_date: DateTime<Utc>,
    /// Object key storage.
    pub objects: RwLock<KeyStore>,
}

impl std::fmt::Debug for S3Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Bucket")
            .field("name", &self.name)
            .field("creation_date", &self.creation_date)
            .field("object_count", &self.objects.read().len())
            .finish()
    }
}

impl S3Bucket {
    /// Create an empty bucket.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            creation_date: Utc::now(),
            objects: RwLock::new(KeyStore::default()),
        }
    }

    /// Whether the bucket contains zero objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }
}
