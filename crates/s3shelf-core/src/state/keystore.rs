//! Per-bucket object storage.
//!
//! [`KeyStore`] keeps objects in a `BTreeMap`, so iteration is already in
//! ascending key order and listings feed straight into
//! [`list_sorted`](crate::listing::list_sorted) without sorting.

use std::collections::BTreeMap;

use crate::listing::{ListPage, ListQuery, list_sorted};

use super::object::StoredObject;

/// Sorted map of object key to object.
#[derive(Debug, Default)]
pub struct KeyStore {
    objects: BTreeMap<String, StoredObject>,
}

impl KeyStore {
    /// Insert or replace an object. Returns the previous object if any.
    pub fn put(&mut self, object: StoredObject) -> Option<StoredObject> {
        self.objects.insert(object.key.clone(), object)
    }

    /// Get an object by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&StoredObject> {
        self.objects.get(key)
    }

    /// Remove an object by key. Returns the removed object if any.
    pub fn delete(&mut self, key: &str) -> Option<StoredObject> {
        self.objects.remove(key)
    }

    /// Number of stored objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &StoredObject> {
        self.objects.values()
    }

    /// List one page of objects.
    ///
    /// Entries borrow from the store; callers holding a lock convert them
    /// before releasing it.
    #[must_use]
    pub fn list(&self, query: &ListQuery) -> ListPage<&StoredObject> {
        list_sorted(self.objects.values(), query)
    }
}
