//! # Junban S3 Adapter
//!
//! Document store adapter backing the `PageRepository` port with an
//! S3-compatible bucket (AWS S3, MinIO, ...).

pub mod infrastructure;
