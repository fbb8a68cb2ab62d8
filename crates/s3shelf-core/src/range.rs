//! Byte-range resolution for ranged reads.
//!
//! A range expression is parsed into a [`ByteRange`] and then resolved
//! against a content length into a [`ResolvedRange`], a half-open window that
//! always lies within the content. Every failure, syntactic or semantic, is
//! [`S3ServiceError::InvalidRange`].
//!
//! Supported forms:
//! - `bytes=A-B`: bytes `A` through `B` inclusive, `B` clamped to the end;
//! - `bytes=A-`: from `A` to the end;
//! - `bytes=-N`: the last `N` bytes, or the whole content when `N` exceeds it.
//!
//! Multiple ranges, signs, whitespace and empty bounds are rejected.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use s3shelf_model::types::ContentRange;

use crate::error::{S3ServiceError, S3ServiceResult};

const UNIT_PREFIX: &str = "bytes=";

/// A parsed, not yet resolved, range expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRange {
    /// `bytes=first-last`
    FromTo {
        /// First byte offset.
        first: u64,
        /// Last byte offset, inclusive.
        last: u64,
    },
    /// `bytes=first-`
    From {
        /// First byte offset.
        first: u64,
    },
    /// `bytes=-len`
    Suffix {
        /// Number of trailing bytes.
        len: u64,
    },
}

impl FromStr for ByteRange {
    type Err = S3ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s
            .strip_prefix(UNIT_PREFIX)
            .ok_or(S3ServiceError::InvalidRange)?;
        let (first, last) = spec.split_once('-').ok_or(S3ServiceError::InvalidRange)?;

        match (first.is_empty(), last.is_empty()) {
            (true, true) => Err(S3ServiceError::InvalidRange),
            (true, false) => Ok(Self::Suffix {
                len: parse_bound(last)?,
            }),
            (false, true) => Ok(Self::From {
                first: parse_bound(first)?,
            }),
            (false, false) => Ok(Self::FromTo {
                first: parse_bound(first)?,
                last: parse_bound(last)?,
            }),
        }
    }
}

impl fmt::Display for ByteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FromTo { first, last } => write!(f, "{UNIT_PREFIX}{first}-{last}"),
            Self::From { first } => write!(f, "{UNIT_PREFIX}{first}-"),
            Self::Suffix { len } => write!(f, "{UNIT_PREFIX}-{len}"),
        }
    }
}

/// Parse one bound: ASCII digits only, saturating on overflow.
fn parse_bound(s: &str) -> S3ServiceResult<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(S3ServiceError::InvalidRange);
    }
    Ok(s.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    }))
}

impl ByteRange {
    /// Resolve against `content_length`.
    ///
    /// Fails when the content is empty, when the range starts at or past the
    /// end, or when `first > last`.
    pub fn resolve(self, content_length: u64) -> S3ServiceResult<ResolvedRange> {
        if content_length == 0 {
            return Err(S3ServiceError::InvalidRange);
        }
        let (start, end) = match self {
            Self::FromTo { first, last } => {
                if first > last {
                    return Err(S3ServiceError::InvalidRange);
                }
                (first, last.min(content_length - 1) + 1)
            }
            Self::From { first } => (first, content_length),
            Self::Suffix { len } => (content_length.saturating_sub(len), content_length),
        };
        if start >= content_length {
            return Err(S3ServiceError::InvalidRange);
        }
        Ok(ResolvedRange {
            start,
            end,
            total: content_length,
        })
    }
}

/// A satisfiable range: `start..end` within content of `total` bytes.
///
/// Invariant: `start < end <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRange {
    /// First byte offset.
    pub start: u64,
    /// One past the last byte offset.
    pub end: u64,
    /// Full content length.
    pub total: u64,
}

impl ResolvedRange {
    /// Number of bytes in the range. Never zero.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Always `false`; satisfiable ranges hold at least one byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Offset of the last byte, inclusive.
    #[must_use]
    pub fn last(&self) -> u64 {
        self.end - 1
    }

    /// The inclusive form reported back to clients.
    #[must_use]
    pub fn content_range(&self) -> ContentRange {
        ContentRange {
            start: self.start,
            end: self.last(),
            total: self.total,
        }
    }

    /// Cut the range out of `body` without copying.
    ///
    /// `body` must be the content this range was resolved against.
    pub fn slice(&self, body: &Bytes) -> S3ServiceResult<Bytes> {
        let start = usize::try_from(self.start).map_err(anyhow::Error::from)?;
        let end = usize::try_from(self.end).map_err(anyhow::Error::from)?;
        if end > body.len() {
            return Err(anyhow::anyhow!(
                "range {}-{} exceeds body of {} bytes",
                self.start,
                self.last(),
                body.len()
            )
            .into());
        }
        Ok(body.slice(start..end))
    }
}

impl fmt::Display for ResolvedRange {
    /// `Content-Range` header form, e.g. `bytes 4-7/11`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bytes {}-{}/{}", self.start, self.last(), self.total)
    }
}

/// Resolve a range expression against a content length.
///
/// # Examples
///
/// ```
/// use s3shelf_core::range::resolve_range;
///
/// let range = resolve_range(11, "bytes=4-7").unwrap();
/// assert_eq!((range.start, range.end), (4, 8));
///
/// let range = resolve_range(11, "bytes=-8").unwrap();
/// assert_eq!((range.start, range.end), (3, 11));
///
/// assert!(resolve_range(11, "bytes=40-50").is_err());
/// assert!(resolve_range(0, "bytes=0-").is_err());
/// ```
pub fn resolve_range(content_length: u64, expr: &str) -> S3ServiceResult<ResolvedRange> {
    expr.parse::<ByteRange>()?.resolve(content_length)
}
