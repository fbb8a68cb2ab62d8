//! Store error types.
//!
//! Defines [`S3ServiceError`], the error enum shared by the engines and the
//! provider. Each variant carries a stable S3 error code through
//! [`S3ServiceError::code`]; turning that into an HTTP status and body is the
//! job of whatever transport embeds the store.
//!
//! # Usage
//!
//! ```
//! use s3shelf_core::error::S3ServiceError;
//!
//! let err = S3ServiceError::NoSuchBucket {
//!     bucket: "my-bucket".to_owned(),
//! };
//! assert_eq!(err.code(), "NoSuchBucket");
//! ```

/// Store error type.
///
/// The first four variants are the terminal conditions the listing and range
/// paths report. They describe caller misuse or absent resources, so nothing
/// in the store retries them.
#[derive(Debug, thiserror::Error)]
pub enum S3ServiceError {
    // -----------------------------------------------------------------------
    // Resource errors
    // -----------------------------------------------------------------------
    /// The specified bucket does not exist.
    #[error("The specified bucket does not exist: {bucket}")]
    NoSuchBucket {
        /// The bucket name that was not found.
        bucket: String,
    },

    /// The specified key does not exist.
    #[error("The specified key does not exist: {key}")]
    NoSuchKey {
        /// The key that was not found.
        key: String,
    },

    /// The bucket is not empty and cannot be deleted.
    #[error("The bucket you tried to delete is not empty: {bucket}")]
    BucketNotEmpty {
        /// The bucket name that is not empty.
        bucket: String,
    },

    /// The requested range is not satisfiable.
    #[error("The requested range is not satisfiable")]
    InvalidRange,

    // -----------------------------------------------------------------------
    // Request errors
    // -----------------------------------------------------------------------
    /// The bucket already exists in this store.
    #[error(
        "Your previous request to create the named bucket succeeded and you already own it: {bucket}"
    )]
    BucketAlreadyOwnedByYou {
        /// The bucket name that already exists.
        bucket: String,
    },

    /// An argument provided is invalid.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    /// The key is too long.
    #[error("Your key is too long")]
    KeyTooLong,

    // -----------------------------------------------------------------------
    // Internal / catch-all
    // -----------------------------------------------------------------------
    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl S3ServiceError {
    /// The S3 error code for this error, e.g. `"NoSuchKey"`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoSuchBucket { .. } => "NoSuchBucket",
            Self::NoSuchKey { .. } => "NoSuchKey",
            Self::BucketNotEmpty { .. } => "BucketNotEmpty",
            Self::InvalidRange => "InvalidRange",
            Self::BucketAlreadyOwnedByYou { .. } => "BucketAlreadyOwnedByYou",
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::KeyTooLong => "KeyTooLongError",
            Self::Internal(_) => "InternalError",
        }
    }
}

/// Convenience result type for store operations.
pub type S3ServiceResult<T> = Result<T, S3ServiceError>;
