//! Operation handlers.
//!
//! Each submodule adds `handle_*` methods to [`crate::provider::S3Provider`],
//! taking an input from `s3shelf_model::input` and returning the matching
//! output or an [`S3ServiceError`](crate::error::S3ServiceError).

pub mod bucket;
pub mod list;
pub mod object;
