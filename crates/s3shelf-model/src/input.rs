//! Operation inputs.

use bytes::Bytes;

use crate::types::ObjectIdentifier;

/// CreateBucket input.
#[derive(Debug, Clone, Default)]
pub struct CreateBucketInput {
    pub bucket: String,
}

/// DeleteBucket input.
#[derive(Debug, Clone, Default)]
pub struct DeleteBucketInput {
    pub bucket: String,
}

/// HeadBucket input.
#[derive(Debug, Clone, Default)]
pub struct HeadBucketInput {
    pub bucket: String,
}

/// PutObject input.
#[derive(Debug, Clone, Default)]
pub struct PutObjectInput {
    pub body: Bytes,
    pub bucket: String,
    pub key: String,
}

/// GetObject input.
#[derive(Debug, Clone, Default)]
pub struct GetObjectInput {
    pub bucket: String,
    pub key: String,
    /// Range expression such as `bytes=0-499`, `bytes=500-` or `bytes=-500`.
    pub range: Option<String>,
}

/// HeadObject input.
#[derive(Debug, Clone, Default)]
pub struct HeadObjectInput {
    pub bucket: String,
    pub key: String,
}

/// DeleteObject input.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectInput {
    pub bucket: String,
    pub key: String,
}

/// DeleteObjects input.
#[derive(Debug, Clone, Default)]
pub struct DeleteObjectsInput {
    pub bucket: String,
    pub objects: Vec<ObjectIdentifier>,
    /// Suppress the per-key success entries in the output.
    pub quiet: Option<bool>,
}

/// CopyObject input.
#[derive(Debug, Clone, Default)]
pub struct CopyObjectInput {
    /// Destination bucket.
    pub bucket: String,
    /// Source in the form `bucket/key` or `/bucket/key`, percent-encoded.
    pub copy_source: String,
    /// Destination key.
    pub key: String,
}

/// ListBuckets input.
#[derive(Debug, Clone, Default)]
pub struct ListBucketsInput {
    pub prefix: Option<String>,
}

/// ListObjects (v1) input.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsInput {
    pub bucket: String,
    pub delimiter: Option<String>,
    pub marker: Option<String>,
    pub max_keys: Option<i32>,
    pub prefix: Option<String>,
}

/// ListObjectsV2 input.
#[derive(Debug, Clone, Default)]
pub struct ListObjectsV2Input {
    pub bucket: String,
    pub continuation_token: Option<String>,
    pub delimiter: Option<String>,
    pub max_keys: Option<i32>,
    pub prefix: Option<String>,
    pub start_after: Option<String>,
}
