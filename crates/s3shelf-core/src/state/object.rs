//! Stored object representation.

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::keys::ListEntry;
use crate::utils::compute_etag;

/// One object held in a bucket.
///
/// The body is a reference-counted [`Bytes`], so readers clone it cheaply
/// under the bucket lock and slice it after releasing the lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// The object key.
    pub key: String,
    /// Object content.
    pub body: Bytes,
    /// Quoted MD5 ETag of the content.
    pub etag: String,
    /// When the object was last written.
    pub last_modified: DateTime<Utc>,
}

impl StoredObject {
    /// Create an object, computing its ETag and stamping it with the current time.
    #[must_use]
    pub fn new(key: String, body: Bytes) -> Self {
        let etag = compute_etag(&body);
        Self {
            key,
            body,
            etag,
            last_modified: Utc::now(),
        }
    }

    /// Content length in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.body.len() as u64
    }

    /// A copy of this object under a new key, with a fresh timestamp.
    #[must_use]
    pub fn copy_to(&self, key: String) -> Self {
        Self {
            key,
            body: self.body.clone(),
            etag: self.etag.clone(),
            last_modified: Utc::now(),
        }
    }
}

impl ListEntry for StoredObject {
    fn key(&self) -> &str {
        &self.key
    }
}
