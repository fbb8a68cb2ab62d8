//! The object listing engine.
//!
//! [`list`] and [`list_sorted`] turn a bucket's key enumeration and a
//! [`ListQuery`] into one [`ListPage`]: the keys returned directly, the
//! common prefixes that keys were rolled up into, and the pagination state.
//!
//! The scan is a single forward pass over ascending keys:
//!
//! 1. keys at or before the marker are skipped;
//! 2. keys outside the prefix are skipped;
//! 3. with a delimiter, a key whose remainder after the prefix contains the
//!    delimiter rolls up into a common prefix, emitted once;
//! 4. every emitted key and every emitted common prefix counts against
//!    `max_keys`.
//!
//! Keys sharing a common prefix are contiguous in sorted order, so the most
//! recently emitted common prefix is the only one that can still absorb
//! keys. Absorbed keys never count against `max_keys` but do advance the
//! cursor, so a group is never split across pages and the next page never
//! re-emits it.

use tracing::trace;
use typed_builder::TypedBuilder;

use crate::keys::{
    ListEntry, common_prefix, is_ascending, is_past_marker, matches_prefix, sort_by_key,
};

/// Default number of entries in a page when the caller does not say.
pub const DEFAULT_MAX_KEYS: usize = 1000;

/// Parameters of one listing call.
///
/// # Examples
///
/// ```
/// use s3shelf_core::listing::ListQuery;
///
/// let query = ListQuery::builder().prefix("photos/").delimiter("/").build();
/// assert_eq!(query.max_keys, 1000);
/// assert!(query.marker.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct ListQuery {
    /// Only keys starting with this prefix are listed. Empty matches all.
    #[builder(default, setter(into))]
    pub prefix: String,
    /// Roll keys up at the first occurrence of this string after the
    /// prefix. Empty disables grouping.
    #[builder(default, setter(into))]
    pub delimiter: String,
    /// Exclusive resumption point. Empty starts from the first key.
    #[builder(default, setter(into))]
    pub marker: String,
    /// Maximum number of entries (keys plus common prefixes) in the page.
    #[builder(default = DEFAULT_MAX_KEYS)]
    pub max_keys: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPage<T> {
    /// Entries returned directly, in ascending key order.
    pub entries: Vec<T>,
    /// Common prefixes, in ascending order of first appearance.
    pub common_prefixes: Vec<String>,
    /// Whether more entries remain after this page.
    pub is_truncated: bool,
    /// The last key this page consumed. Only set when truncated; passing it
    /// back as the marker resumes the listing.
    ///
    /// A `max_keys = 0` page consumes nothing, so it can be truncated with no
    /// `next_marker`. Callers paging until `is_truncated` is false must use a
    /// nonzero page size or they never advance.
    pub next_marker: Option<String>,
}

impl<T> ListPage<T> {
    /// An empty, non-truncated page.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            common_prefixes: Vec::new(),
            is_truncated: false,
            next_marker: None,
        }
    }

    /// Number of entries counted against `max_keys`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len() + self.common_prefixes.len()
    }

    /// Whether the page holds neither keys nor common prefixes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert every entry, keeping the pagination state.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListPage<U> {
        ListPage {
            entries: self.entries.into_iter().map(f).collect(),
            common_prefixes: self.common_prefixes,
            is_truncated: self.is_truncated,
            next_marker: self.next_marker,
        }
    }
}

impl<T: ListEntry> ListPage<T> {
    /// Keys of the directly returned entries.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ListEntry::key)
    }
}

/// List entries in any order.
///
/// Sorts `entries` by key when they are not already ascending, then runs
/// [`list_sorted`].
///
/// # Examples
///
/// ```
/// use s3shelf_core::listing::{ListQuery, list};
///
/// let keys = vec!["foo", "cab", "bar", "baz"];
/// let page = list(keys, &ListQuery::builder().delimiter("a").build());
/// assert_eq!(page.keys().collect::<Vec<_>>(), vec!["foo"]);
/// assert_eq!(page.common_prefixes, vec!["ba", "ca"]);
/// ```
#[must_use]
pub fn list<T: ListEntry>(mut entries: Vec<T>, query: &ListQuery) -> ListPage<T> {
    if !is_ascending(&entries) {
        sort_by_key(&mut entries);
    }
    list_sorted(entries, query)
}

/// List entries that are already in ascending key order.
///
/// Feeding unsorted input breaks marker semantics; use [`list`] when the
/// order is not guaranteed.
#[must_use]
pub fn list_sorted<I, T>(entries: I, query: &ListQuery) -> ListPage<T>
where
    I: IntoIterator<Item = T>,
    T: ListEntry,
{
    let mut page = ListPage::empty();
    let mut consumed = 0usize;
    let mut cursor: Option<String> = None;

    for entry in entries {
        let key = entry.key();
        if !is_past_marker(key, &query.marker) || !matches_prefix(key, &query.prefix) {
            continue;
        }

        let group = common_prefix(key, &query.prefix, &query.delimiter);
        let absorbed = group.is_some_and(|cp| {
            page.common_prefixes
                .last()
                .is_some_and(|open| open.as_str() == cp)
        });

        if !absorbed && consumed >= query.max_keys {
            page.is_truncated = true;
            break;
        }

        let last = cursor.get_or_insert_with(String::new);
        last.clear();
        last.push_str(key);

        match group {
            Some(_) if absorbed => {}
            Some(cp) => {
                page.common_prefixes.push(cp.to_owned());
                consumed += 1;
            }
            None => {
                page.entries.push(entry);
                consumed += 1;
            }
        }
    }

    if page.is_truncated {
        page.next_marker = cursor;
    }

    trace!(
        prefix = ?query.prefix,
        delimiter = ?query.delimiter,
        marker = ?query.marker,
        max_keys = query.max_keys,
        keys = page.entries.len(),
        common_prefixes = page.common_prefixes.len(),
        is_truncated = page.is_truncated,
        "listing scan finished"
    );

    page
}
