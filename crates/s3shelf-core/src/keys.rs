//! Key ordering and prefix helpers.
//!
//! Keys are UTF-8 strings compared byte by byte, which is exactly the
//! ordering `str`'s `Ord` implementation gives. Every function here works on
//! that ordering, so markers behave as resumption points in the sorted key
//! space rather than as positions.

use std::cmp::Ordering;

/// Anything that can be enumerated by object key.
pub trait ListEntry {
    /// The object key.
    fn key(&self) -> &str;
}

impl<T: ListEntry + ?Sized> ListEntry for &T {
    fn key(&self) -> &str {
        (**self).key()
    }
}

impl ListEntry for str {
    fn key(&self) -> &str {
        self
    }
}

impl ListEntry for String {
    fn key(&self) -> &str {
        self
    }
}

/// A bare `(key, size)` pair, the minimal shape a bucket enumeration needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEntry {
    /// The object key.
    pub key: String,
    /// Content length in bytes.
    pub size: u64,
}

impl KeyEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
        }
    }
}

impl ListEntry for KeyEntry {
    fn key(&self) -> &str {
        &self.key
    }
}

/// Compare two entries by key.
pub fn cmp_keys<T: ListEntry + ?Sized>(a: &T, b: &T) -> Ordering {
    a.key().as_bytes().cmp(b.key().as_bytes())
}

/// Whether `entries` is in strictly ascending key order.
///
/// # Examples
///
/// ```
/// use s3shelf_core::keys::is_ascending;
///
/// assert!(is_ascending(&["a", "b", "c"]));
/// assert!(!is_ascending(&["b", "a"]));
/// assert!(!is_ascending(&["a", "a"]));
/// ```
#[must_use]
pub fn is_ascending<T: ListEntry>(entries: &[T]) -> bool {
    entries
        .windows(2)
        .all(|pair| cmp_keys(&pair[0], &pair[1]) == Ordering::Less)
}

/// Sort entries into ascending key order.
pub fn sort_by_key<T: ListEntry>(entries: &mut [T]) {
    entries.sort_unstable_by(cmp_keys);
}

/// Whether `key` lies strictly after `marker`. An empty marker admits every key.
///
/// # Examples
///
/// ```
/// use s3shelf_core::keys::is_past_marker;
///
/// assert!(is_past_marker("b", ""));
/// assert!(is_past_marker("b", "a"));
/// assert!(!is_past_marker("b", "b"));
/// assert!(!is_past_marker("a", "b"));
/// ```
#[must_use]
pub fn is_past_marker(key: &str, marker: &str) -> bool {
    marker.is_empty() || key.as_bytes() > marker.as_bytes()
}

/// Whether `key` starts with `prefix`. The empty prefix matches every key.
#[must_use]
pub fn matches_prefix(key: &str, prefix: &str) -> bool {
    key.as_bytes().starts_with(prefix.as_bytes())
}

/// The common prefix `key` rolls up into under `prefix` and `delimiter`.
///
/// Looks for the first occurrence of `delimiter` after `prefix` and returns
/// the key up to and including it. Returns `None` when the delimiter is
/// empty, when the key does not start with `prefix`, or when the delimiter
/// does not occur after the prefix. The result borrows from `key`.
///
/// # Examples
///
/// ```
/// use s3shelf_core::keys::common_prefix;
///
/// assert_eq!(common_prefix("foo/baz/xyzzy", "foo/", "/"), Some("foo/baz/"));
/// assert_eq!(common_prefix("foo/bar", "foo/", "/"), None);
/// assert_eq!(common_prefix("bazar", "ba", "a"), Some("baza"));
/// assert_eq!(common_prefix("a/b", "", ""), None);
/// ```
#[must_use]
pub fn common_prefix<'a>(key: &'a str, prefix: &str, delimiter: &str) -> Option<&'a str> {
    if delimiter.is_empty() {
        return None;
    }
    let rest = key.strip_prefix(prefix)?;
    let pos = rest.find(delimiter)?;
    Some(&key[..prefix.len() + pos + delimiter.len()])
}
