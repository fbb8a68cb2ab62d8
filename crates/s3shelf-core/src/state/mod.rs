//! In-memory store state.
//!
//! - [`S3ServiceState`] -- the bucket registry
//! - [`S3Bucket`] -- one bucket and its objects
//! - [`KeyStore`] -- sorted key-level storage
//! - [`StoredObject`] -- an object body with its metadata
//!
//! # Thread Safety
//!
//! All types are `Send + Sync`. Concurrent access is handled via:
//!
//! - `DashMap` for the bucket table
//! - `parking_lot::RwLock` for each bucket's object store

pub(crate) mod bucket;
pub(crate) mod keystore;
pub(crate) mod object;
pub(crate) mod service;

pub use bucket::S3Bucket;
pub use keystore::KeyStore;
pub use object::StoredObject;
pub use service::S3ServiceState;
