//! Operation outputs.

use bytes::Bytes;

use crate::types::{
    Bucket, CommonPrefix, ContentRange, CopyObjectResult, DeletedObject, Error, Object,
};

/// CreateBucket output.
#[derive(Debug, Clone, Default)]
pub struct CreateBucketOutput {
    pub location: Option<String>,
}

/// DeleteBucket output.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketOutput {}

/// HeadBucket output.
#[derive(Debug, Clone, Default)]
pub struct HeadBucketOutput {
    pub creation_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// PutObject output.
#[derive(Debug, Clone, Default)]
pub struct PutObjectOutput {
    pub e_tag: Option<String>,
    pub size: Option<i64>,
}

/// GetObject output.
#[derive(Debug, Clone, Default)]
pub struct GetObjectOutput {
    pub accept_ranges: Option<String>,
    pub body: Bytes,
    pub content_length: Option<i64>,
    /// Present only when the request carried a range.
    pub content_range: Option<ContentRange>,
    pub e_tag: Option<String>,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

/// HeadObject output.
#[derive(Debug, Clone, Default)]
pub struct HeadObjectOutput {
    pub accept_ranges: Option<String>,
    pub content_length: Option<i64>,
    pub e_tag: Option<String>,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}

/// DeleteObject output.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectOutput {}

/// DeleteObjects output.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectsOutput {
    pub deleted: Vec<DeletedObject>,
    pub errors: Vec<Error>,
}

/// CopyObject output.
#[derive(Debug, Clone, Default)]
pub struct CopyObjectOutput {
    pub copy_object_result: Option<CopyObjectResult>,
}

/// ListBuckets output.
#[derive(Debug, Clone, Default)]
pub struct ListBucketsOutput {
    pub buckets: Vec<Bucket>,
    pub prefix: Option<String>,
}

/// ListObjects (v1) output.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsOutput {
    pub common_prefixes: Vec<CommonPrefix>,
    pub contents: Vec<Object>,
    pub delimiter: Option<String>,
    pub is_truncated: Option<bool>,
    pub marker: Option<String>,
    pub max_keys: Option<i32>,
    pub name: Option<String>,
    pub next_marker: Option<String>,
    pub prefix: Option<String>,
}

/// ListObjectsV2 output.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsV2Output {
    pub common_prefixes: Vec<CommonPrefix>,
    pub contents: Vec<Object>,
    pub continuation_token: Option<String>,
    pub delimiter: Option<String>,
    pub is_truncated: Option<bool>,
    pub key_count: Option<i32>,
    pub max_keys: Option<i32>,
    pub name: Option<String>,
    pub next_continuation_token: Option<String>,
    pub prefix: Option<String>,
    pub start_after: Option<String>,
}
