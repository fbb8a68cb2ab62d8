//! Shared structures referenced by inputs and outputs.

/// A bucket as reported by `ListBuckets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bucket {
    pub creation_date: Option<chrono::DateTime<chrono::Utc>>,
    pub name: Option<String>,
}

/// A single grouped entry in a delimited listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonPrefix {
    pub prefix: Option<String>,
}

/// An object summary in a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    pub e_tag: Option<String>,
    pub key: Option<String>,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
    pub size: Option<i64>,
}

/// The satisfied portion of a ranged read.
///
/// `start` and `end` are inclusive byte offsets; `total` is the full object
/// length. A transport renders this as `Content-Range: bytes start-end/total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentRange {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

/// A key to remove in a batch delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectIdentifier {
    pub key: String,
}

/// A key that a batch delete removed (or that was already absent).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletedObject {
    pub key: Option<String>,
}

/// A key that a batch delete could not remove.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Error {
    pub code: Option<String>,
    pub key: Option<String>,
    pub message: Option<String>,
}

/// Result body of a successful copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyObjectResult {
    pub e_tag: Option<String>,
    pub last_modified: Option<chrono::DateTime<chrono::Utc>>,
}
