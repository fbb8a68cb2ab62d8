//! Request and response types for the s3shelf object store.
//!
//! These are plain data carriers shaped after the S3 API. They hold no
//! behavior; the operations that consume and produce them live in
//! `s3shelf-core`. Wire serialization (XML bodies, HTTP headers) is left to
//! whatever transport embeds the store.
#![allow(missing_docs)]

pub mod input;
pub mod output;
pub mod types;
