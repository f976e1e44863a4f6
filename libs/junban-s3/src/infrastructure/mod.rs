//! Infrastructure adapters backed by S3

mod page_repository;

pub use page_repository::S3PageRepository;
