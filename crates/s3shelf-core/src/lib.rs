//! In-memory S3-compatible object store.
//!
//! The two engines at the center of this crate are pure and synchronous:
//!
//! - [`listing`] turns a sorted key enumeration plus prefix, delimiter,
//!   marker and max-keys into one page of keys and common prefixes;
//! - [`range`] resolves `bytes=` expressions against a content length.
//!
//! [`S3Provider`] wraps them in bucket and object operations over shared,
//! thread-safe state.
//!
//! # Architecture
//!
//! ```text
//! S3Provider (handle_* operations)
//!        |
//!        v
//!   S3ServiceState (DashMap of buckets)
//!        |
//!        v
//!   S3Bucket -> RwLock<KeyStore> (BTreeMap of objects)
//!        |
//!        v
//!   listing / range engines
//! ```

pub mod config;
pub mod error;
pub mod keys;
pub mod listing;
mod ops;
pub mod provider;
pub mod range;
pub mod state;
pub mod telemetry;
pub mod utils;
pub mod validation;

pub use config::StoreConfig;
pub use error::{S3ServiceError, S3ServiceResult};
pub use provider::S3Provider;
