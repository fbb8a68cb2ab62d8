//! Top-level store state.
//!
//! [`S3ServiceState`] owns the bucket registry. All operations are
//! thread-safe via `DashMap`.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::Ref;
use tracing::{debug, info};

use crate::error::S3ServiceError;

use super::bucket::S3Bucket;

/// Bucket registry.
///
/// A [`Ref`] returned by [`S3ServiceState::get_bucket`] holds a shard read
/// lock, so a bucket cannot be removed while a caller is working inside it.
pub struct S3ServiceState {
    /// Bucket name to `S3Bucket` mapping.
    buckets: DashMap<String, S3Bucket>,
}

impl std::fmt::Debug for S3ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3ServiceState")
            .field("bucket_count", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl Default for S3ServiceState {
    fn default() -> Self {
        Self::new()
    }
}

impl S3ServiceState {
    /// Create a new, empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: DashMap::new(),
        }
    }

    /// Create a new bucket.
    ///
    /// # Errors
    ///
    /// [`S3ServiceError::BucketAlreadyOwnedByYou`] if the name is taken.
    pub fn create_bucket(&self, name: String) -> Result<(), S3ServiceError> {
        match self.buckets.entry(name) {
            Entry::Occupied(entry) => Err(S3ServiceError::BucketAlreadyOwnedByYou {
                bucket: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                let name = entry.key().clone();
                entry.insert(S3Bucket::new(name.clone()));
                info!(bucket = %name, "bucket created");
                Ok(())
            }
        }
    }

    /// Delete an empty bucket.
    ///
    /// The emptiness check and the removal happen under the same shard
    /// write lock, so a concurrent put either lands first (and the delete
    /// fails) or fails with `NoSuchBucket`.
    ///
    /// # Errors
    ///
    /// - [`S3ServiceError::NoSuchBucket`] if the bucket does not exist.
    /// - [`S3ServiceError::BucketNotEmpty`] if the bucket still holds objects.
    pub fn delete_bucket(&self, name: &str) -> Result<(), S3ServiceError> {
        if self
            .buckets
            .remove_if(name, |_, bucket| bucket.is_empty())
            .is_some()
        {
            info!(bucket = %name, "bucket deleted");
            return Ok(());
        }

        if self.buckets.contains_key(name) {
            Err(S3ServiceError::BucketNotEmpty {
                bucket: name.to_owned(),
            })
        } else {
            Err(S3ServiceError::NoSuchBucket {
                bucket: name.to_owned(),
            })
        }
    }

    /// Get a reference to a bucket.
    ///
    /// # Errors
    ///
    /// Returns [`S3ServiceError::NoSuchBucket`] if the bucket does not exist.
    pub fn get_bucket(&self, name: &str) -> Result<Ref<'_, String, S3Bucket>, S3ServiceError> {
        self.buckets
            .get(name)
            .ok_or_else(|| S3ServiceError::NoSuchBucket {
                bucket: name.to_owned(),
            })
    }

    /// List all buckets, returning `(name, creation_date)` pairs sorted by name.
    #[must_use]
    pub fn list_buckets(&self) -> Vec<(String, DateTime<Utc>)> {
        let mut buckets: Vec<(String, DateTime<Utc>)> = self
            .buckets
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().creation_date))
            .collect();
        buckets.sort_by(|a, b| a.0.cmp(&b.0));
        buckets
    }

    /// Check whether a bucket exists.
    #[must_use]
    pub fn bucket_exists(&self, name: &str) -> bool {
        self.buckets.contains_key(name)
    }

    /// Reset all state, removing all buckets.
    pub fn reset(&self) {
        debug!("resetting all store state");
        self.buckets.clear();
    }
}
