//! List operation handlers.
//!
//! Implements `list_objects` (v1, marker based) and `list_objects_v2`
//! (continuation-token based). Both hold the bucket's read lock for the whole
//! scan, so a page reflects one consistent state of the bucket.

use s3shelf_model::input::{ListObjectsInput, ListObjectsV2Input};
use s3shelf_model::output::{ListObjectsOutput, ListObjectsV2Output};
use s3shelf_model::types::{CommonPrefix, Object};
use tracing::debug;

use crate::error::S3ServiceResult;
use crate::listing::{ListPage, ListQuery};
use crate::provider::S3Provider;
use crate::state::StoredObject;
use crate::utils::{decode_continuation_token, encode_continuation_token};
use crate::validation::validate_max_keys;

/// Convert a stored object to a listing entry.
#[allow(clippy::cast_possible_wrap)]
fn to_s3_object(obj: &StoredObject) -> Object {
    Object {
        e_tag: Some(obj.etag.clone()),
        key: Some(obj.key.clone()),
        last_modified: Some(obj.last_modified),
        size: Some(obj.size() as i64),
    }
}

fn to_common_prefixes(prefixes: Vec<String>) -> Vec<CommonPrefix> {
    prefixes
        .into_iter()
        .map(|p| CommonPrefix { prefix: Some(p) })
        .collect()
}

/// Max-keys as echoed back to the caller.
fn echo_max_keys(max_keys: usize) -> i32 {
    i32::try_from(max_keys).unwrap_or(i32::MAX)
}

impl S3Provider {
    /// List objects (v1 API).
    ///
    /// Prefix, delimiter, marker, and max-keys are echoed back unmodified.
    pub fn handle_list_objects(
        &self,
        input: ListObjectsInput,
    ) -> S3ServiceResult<ListObjectsOutput> {
        let max_keys = validate_max_keys(input.max_keys, self.config.default_max_keys)?;
        let query = ListQuery::builder()
            .prefix(input.prefix.clone().unwrap_or_default())
            .delimiter(input.delimiter.clone().unwrap_or_default())
            .marker(input.marker.clone().unwrap_or_default())
            .max_keys(max_keys)
            .build();

        let page = self.list_page(&input.bucket, &query)?;

        debug!(
            bucket = %input.bucket,
            prefix = %query.prefix,
            count = page.len(),
            is_truncated = page.is_truncated,
            "list_objects completed"
        );

        Ok(ListObjectsOutput {
            common_prefixes: to_common_prefixes(page.common_prefixes),
            contents: page.entries,
            delimiter: input.delimiter,
            is_truncated: Some(page.is_truncated),
            marker: input.marker,
            max_keys: Some(echo_max_keys(max_keys)),
            name: Some(input.bucket),
            next_marker: page.next_marker,
            prefix: input.prefix,
        })
    }

    /// List objects (v2 API with continuation tokens).
    ///
    /// A continuation token takes precedence over `start_after`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn handle_list_objects_v2(
        &self,
        input: ListObjectsV2Input,
    ) -> S3ServiceResult<ListObjectsV2Output> {
        let max_keys = validate_max_keys(input.max_keys, self.config.default_max_keys)?;
        let marker = match input.continuation_token.as_deref() {
            Some(token) => decode_continuation_token(token)?,
            None => input.start_after.clone().unwrap_or_default(),
        };
        let query = ListQuery::builder()
            .prefix(input.prefix.clone().unwrap_or_default())
            .delimiter(input.delimiter.clone().unwrap_or_default())
            .marker(marker)
            .max_keys(max_keys)
            .build();

        let page = self.list_page(&input.bucket, &query)?;
        let key_count = page.len() as i32;

        debug!(
            bucket = %input.bucket,
            prefix = %query.prefix,
            count = key_count,
            is_truncated = page.is_truncated,
            "list_objects_v2 completed"
        );

        Ok(ListObjectsV2Output {
            common_prefixes: to_common_prefixes(page.common_prefixes),
            contents: page.entries,
            continuation_token: input.continuation_token,
            delimiter: input.delimiter,
            is_truncated: Some(page.is_truncated),
            key_count: Some(key_count),
            max_keys: Some(echo_max_keys(max_keys)),
            name: Some(input.bucket),
            next_continuation_token: page.next_marker.as_deref().map(encode_continuation_token),
            prefix: input.prefix,
            start_after: input.start_after,
        })
    }

    /// Run one listing under the bucket's read lock.
    fn list_page(&self, bucket: &str, query: &ListQuery) -> S3ServiceResult<ListPage<Object>> {
        let bucket = self.state.get_bucket(bucket)?;
        let store = bucket.objects.read();
        Ok(store.list(query).map(to_s3_object))
    }
}
