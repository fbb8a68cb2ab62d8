//! Bucket operation handlers.
//!
//! Implements `create_bucket`, `delete_bucket`, `head_bucket`, and
//! `list_buckets`.

use s3shelf_model::input::{
    CreateBucketInput, DeleteBucketInput, HeadBucketInput, ListBucketsInput,
};
use s3shelf_model::output::{
    CreateBucketOutput, DeleteBucketOutput, HeadBucketOutput, ListBucketsOutput,
};
use s3shelf_model::types::Bucket;
use tracing::debug;

use crate::error::S3ServiceResult;
use crate::provider::S3Provider;

impl S3Provider {
    /// Create a new bucket.
    pub fn handle_create_bucket(
        &self,
        input: CreateBucketInput,
    ) -> S3ServiceResult<CreateBucketOutput> {
        let bucket_name = input.bucket;

        self.state.create_bucket(bucket_name.clone())?;

        debug!(bucket = %bucket_name, "create_bucket completed");

        Ok(CreateBucketOutput {
            location: Some(format!("/{bucket_name}")),
        })
    }

    /// Delete an empty bucket.
    pub fn handle_delete_bucket(
        &self,
        input: DeleteBucketInput,
    ) -> S3ServiceResult<DeleteBucketOutput> {
        let bucket_name = input.bucket;

        self.state.delete_bucket(&bucket_name)?;

        debug!(bucket = %bucket_name, "delete_bucket completed");

        Ok(DeleteBucketOutput {})
    }

    /// Check that a bucket exists.
    pub fn handle_head_bucket(&self, input: HeadBucketInput) -> S3ServiceResult<HeadBucketOutput> {
        let bucket_name = input.bucket;
        let bucket = self.state.get_bucket(&bucket_name)?;

        Ok(HeadBucketOutput {
            creation_date: Some(bucket.creation_date),
        })
    }

    /// List buckets sorted by name, optionally restricted to a name prefix.
    #[must_use]
    pub fn handle_list_buckets(&self, input: ListBucketsInput) -> ListBucketsOutput {
        let prefix = input.prefix.as_deref().unwrap_or("");

        let buckets: Vec<Bucket> = self
            .state
            .list_buckets()
            .into_iter()
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(name, creation_date)| Bucket {
                creation_date: Some(creation_date),
                name: Some(name),
            })
            .collect();

        debug!(count = buckets.len(), "list_buckets completed");

        ListBucketsOutput {
            buckets,
            prefix: input.prefix,
        }
    }
}
