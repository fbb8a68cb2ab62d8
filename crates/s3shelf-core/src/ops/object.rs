//! Object operation handlers.
//!
//! Implements `put_object`, `get_object` (with ranged reads), `head_object`,
//! `delete_object`, `delete_objects`, and `copy_object`.

use s3shelf_model::input::{
    CopyObjectInput, DeleteObjectInput, DeleteObjectsInput, GetObjectInput, HeadObjectInput,
    PutObjectInput,
};
use s3shelf_model::output::{
    CopyObjectOutput, DeleteObjectOutput, DeleteObjectsOutput, GetObjectOutput, HeadObjectOutput,
    PutObjectOutput,
};
use s3shelf_model::types::{CopyObjectResult, DeletedObject, Error as DeleteError};
use tracing::debug;

use crate::error::{S3ServiceError, S3ServiceResult};
use crate::provider::S3Provider;
use crate::range::resolve_range;
use crate::state::StoredObject;
use crate::utils::parse_copy_source;
use crate::validation::validate_object_key;

const ACCEPT_RANGES: &str = "bytes";

// S3 DTOs use signed integers for inherently non-negative lengths.
#[allow(clippy::cast_possible_wrap)]
impl S3Provider {
    /// Store an object, replacing any existing object under the same key.
    pub fn handle_put_object(&self, input: PutObjectInput) -> S3ServiceResult<PutObjectOutput> {
        validate_object_key(&input.key)?;

        let bucket = self.state.get_bucket(&input.bucket)?;
        let object = StoredObject::new(input.key, input.body);
        let e_tag = object.etag.clone();
        let size = object.size();
        let key = object.key.clone();
        bucket.objects.write().put(object);
        drop(bucket);

        debug!(bucket = %input.bucket, key = %key, size, "put_object completed");

        Ok(PutObjectOutput {
            e_tag: Some(e_tag),
            size: Some(size as i64),
        })
    }

    /// Read an object, or the part of it selected by `input.range`.
    pub fn handle_get_object(&self, input: GetObjectInput) -> S3ServiceResult<GetObjectOutput> {
        let GetObjectInput { bucket, key, range } = input;
        let object = self.read_object(&bucket, &key)?;

        let (body, content_range) = match range.as_deref() {
            Some(expr) => {
                let resolved = resolve_range(object.size(), expr)?;
                (resolved.slice(&object.body)?, Some(resolved.content_range()))
            }
            None => (object.body.clone(), None),
        };

        debug!(
            bucket = %bucket,
            key = %key,
            range = ?range,
            len = body.len(),
            "get_object completed"
        );

        Ok(GetObjectOutput {
            accept_ranges: Some(ACCEPT_RANGES.to_owned()),
            content_length: Some(body.len() as i64),
            body,
            content_range,
            e_tag: Some(object.etag),
            last_modified: Some(object.last_modified),
        })
    }

    /// Read an object's metadata.
    pub fn handle_head_object(&self, input: HeadObjectInput) -> S3ServiceResult<HeadObjectOutput> {
        let HeadObjectInput { bucket, key } = input;
        let object = self.read_object(&bucket, &key)?;

        Ok(HeadObjectOutput {
            accept_ranges: Some(ACCEPT_RANGES.to_owned()),
            content_length: Some(object.size() as i64),
            e_tag: Some(object.etag),
            last_modified: Some(object.last_modified),
        })
    }

    /// Delete an object. Deleting a missing key succeeds.
    pub fn handle_delete_object(
        &self,
        input: DeleteObjectInput,
    ) -> S3ServiceResult<DeleteObjectOutput> {
        let DeleteObjectInput { bucket, key } = input;
        let target = self.state.get_bucket(&bucket)?;
        let removed = target.objects.write().delete(&key).is_some();
        drop(target);

        debug!(bucket = %bucket, key = %key, removed, "delete_object completed");

        Ok(DeleteObjectOutput {})
    }

    /// Delete several objects in one call.
    ///
    /// Keys that fail validation are reported in `errors`; every other key,
    /// present or not, is reported as deleted unless `quiet` is set.
    pub fn handle_delete_objects(
        &self,
        input: DeleteObjectsInput,
    ) -> S3ServiceResult<DeleteObjectsOutput> {
        let bucket = self.state.get_bucket(&input.bucket)?;
        let quiet = input.quiet.unwrap_or(false);

        let mut deleted: Vec<DeletedObject> = Vec::with_capacity(input.objects.len());
        let mut errors: Vec<DeleteError> = Vec::new();

        let mut store = bucket.objects.write();
        for obj_id in input.objects {
            let key = obj_id.key;
            if let Err(err) = validate_object_key(&key) {
                errors.push(DeleteError {
                    code: Some(err.code().to_owned()),
                    key: Some(key),
                    message: Some(err.to_string()),
                });
                continue;
            }
            store.delete(&key);
            deleted.push(DeletedObject { key: Some(key) });
        }
        drop(store);
        drop(bucket);

        debug!(
            bucket = %input.bucket,
            deleted_count = deleted.len(),
            error_count = errors.len(),
            "delete_objects completed"
        );

        Ok(DeleteObjectsOutput {
            deleted: if quiet { Vec::new() } else { deleted },
            errors,
        })
    }

    /// Copy an object from `copy_source` to `bucket`/`key`.
    ///
    /// # Errors
    ///
    /// - [`S3ServiceError::NoSuchBucket`] if the source or destination
    ///   bucket does not exist.
    /// - [`S3ServiceError::NoSuchKey`] if the source key does not exist.
    pub fn handle_copy_object(&self, input: CopyObjectInput) -> S3ServiceResult<CopyObjectOutput> {
        validate_object_key(&input.key)?;
        let (src_bucket, src_key) = parse_copy_source(&input.copy_source)?;

        if !self.state.bucket_exists(&input.bucket) {
            return Err(S3ServiceError::NoSuchBucket {
                bucket: input.bucket,
            });
        }

        // The source bucket ref is released before the destination is locked.
        let copy = self.read_object(&src_bucket, &src_key)?.copy_to(input.key);
        let result = CopyObjectResult {
            e_tag: Some(copy.etag.clone()),
            last_modified: Some(copy.last_modified),
        };
        let key = copy.key.clone();

        let bucket = self.state.get_bucket(&input.bucket)?;
        bucket.objects.write().put(copy);
        drop(bucket);

        debug!(
            src_bucket = %src_bucket,
            src_key = %src_key,
            bucket = %input.bucket,
            key = %key,
            "copy_object completed"
        );

        Ok(CopyObjectOutput {
            copy_object_result: Some(result),
        })
    }

    /// Clone an object out of its bucket under the read lock.
    fn read_object(&self, bucket: &str, key: &str) -> S3ServiceResult<StoredObject> {
        let bucket = self.state.get_bucket(bucket)?;
        let store = bucket.objects.read();
        store
            .get(key)
            .cloned()
            .ok_or_else(|| S3ServiceError::NoSuchKey {
                key: key.to_owned(),
            })
    }
}
