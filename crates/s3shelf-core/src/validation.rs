//! Request validation.
//!
//! Checks applied by the provider before touching state.

use crate::error::S3ServiceError;

/// Maximum object key length in bytes.
pub const MAX_KEY_BYTES: usize = 1024;

/// Validate an object key.
///
/// Rules:
/// - 1-1024 bytes in length
/// - Must be valid UTF-8 (enforced by the `&str` type)
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidArgument`] if the key is empty, or
/// [`S3ServiceError::KeyTooLong`] if it exceeds 1024 bytes.
///
/// # Examples
///
/// ```
/// use s3shelf_core::validation::validate_object_key;
///
/// assert!(validate_object_key("photos/2024/image.jpg").is_ok());
/// assert!(validate_object_key("").is_err());
/// ```
pub fn validate_object_key(key: &str) -> Result<(), S3ServiceError> {
    if key.is_empty() {
        return Err(S3ServiceError::InvalidArgument {
            message: "Object key must not be empty".to_owned(),
        });
    }

    if key.len() > MAX_KEY_BYTES {
        return Err(S3ServiceError::KeyTooLong);
    }

    Ok(())
}

/// Resolve a requested max-keys value into a page size.
///
/// `None` means the caller did not ask; `default` applies.
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidArgument`] for negative values.
pub fn validate_max_keys(requested: Option<i32>, default: usize) -> Result<usize, S3ServiceError> {
    match requested {
        None => Ok(default),
        Some(n) => usize::try_from(n).map_err(|_| S3ServiceError::InvalidArgument {
            message: format!("max-keys must be non-negative, got {n}"),
        }),
    }
}
