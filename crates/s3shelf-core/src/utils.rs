//! Shared utilities for the store.
//!
//! ETag computation, continuation-token encoding, and copy-source parsing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use md5::{Digest, Md5};

use crate::error::S3ServiceError;

// ---------------------------------------------------------------------------
// ETags
// ---------------------------------------------------------------------------

/// Compute the quoted MD5 ETag of `data`.
///
/// # Examples
///
/// ```
/// use s3shelf_core::utils::compute_etag;
///
/// let etag = compute_etag(b"");
/// assert_eq!(etag, "\"d41d8cd98f00b204e9800998ecf8427e\"");
/// ```
#[must_use]
pub fn compute_etag(data: &[u8]) -> String {
    format!("\"{}\"", hex::encode(Md5::digest(data)))
}

// ---------------------------------------------------------------------------
// Continuation tokens
// ---------------------------------------------------------------------------

/// Encode an object key as a base64 continuation token.
///
/// # Examples
///
/// ```
/// use s3shelf_core::utils::{decode_continuation_token, encode_continuation_token};
///
/// let token = encode_continuation_token("photos/2024/img.jpg");
/// let key = decode_continuation_token(&token).unwrap();
/// assert_eq!(key, "photos/2024/img.jpg");
/// ```
#[must_use]
pub fn encode_continuation_token(key: &str) -> String {
    BASE64_STANDARD.encode(key.as_bytes())
}

/// Decode a base64 continuation token back to an object key.
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidArgument`] if the token is not valid
/// base64 or does not decode to valid UTF-8.
pub fn decode_continuation_token(token: &str) -> Result<String, S3ServiceError> {
    let bytes = BASE64_STANDARD
        .decode(token)
        .map_err(|_| S3ServiceError::InvalidArgument {
            message: "The continuation token provided is incorrect".to_owned(),
        })?;
    String::from_utf8(bytes).map_err(|_| S3ServiceError::InvalidArgument {
        message: "Continuation token contains invalid UTF-8".to_owned(),
    })
}

// ---------------------------------------------------------------------------
// Copy source parsing
// ---------------------------------------------------------------------------

/// Split a copy source of the form `bucket/key` or `/bucket/key` into its
/// bucket and percent-decoded key.
///
/// # Errors
///
/// Returns [`S3ServiceError::InvalidArgument`] if either part is missing or
/// the key does not decode to UTF-8.
///
/// # Examples
///
/// ```
/// use s3shelf_core::utils::parse_copy_source;
///
/// let (bucket, key) = parse_copy_source("/my-bucket/dir/my%20key").unwrap();
/// assert_eq!(bucket, "my-bucket");
/// assert_eq!(key, "dir/my key");
/// ```
pub fn parse_copy_source(source: &str) -> Result<(String, String), S3ServiceError> {
    let source = source.strip_prefix('/').unwrap_or(source);

    let (bucket, key) = source
        .split_once('/')
        .ok_or_else(|| S3ServiceError::InvalidArgument {
            message: "Invalid copy source: must be in the format bucket/key".to_owned(),
        })?;

    if bucket.is_empty() || key.is_empty() {
        return Err(S3ServiceError::InvalidArgument {
            message: "Invalid copy source: bucket and key must not be empty".to_owned(),
        });
    }

    let key = percent_encoding::percent_decode_str(key)
        .decode_utf8()
        .map_err(|_| S3ServiceError::InvalidArgument {
            message: "Invalid copy source: key contains invalid UTF-8".to_owned(),
        })?
        .into_owned();

    Ok((bucket.to_owned(), key))
}
