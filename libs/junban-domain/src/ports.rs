//! Ports (trait definitions) for external dependencies
//!
//! This module defines the contracts (ports) that external adapters must implement.
//! Following hexagonal architecture, the domain defines what it needs, and the
//! infrastructure provides implementations.
//!
//! ## Static Dispatch
//!
//! We use native Rust async traits with `impl Future` return types instead of
//! `async_trait` to ensure zero-cost abstractions and static dispatch.

use std::future::Future;

use crate::like::{LikeEvent, TopicPath};
use crate::ordering::{OrderingError, OrderingPage, PageId};

/// Port for the document store
///
/// This trait abstracts away the storage backend (S3, in-memory, etc.).
/// Implementations must handle:
/// - Storing one JSON-like record per page id
/// - Distinguishing "no such record" from "store unreachable"
/// - Converting infrastructure errors to domain errors
///
/// No queries, indexes or transactions are required; each call is a single
/// round-trip and the backend provides per-document atomicity.
pub trait PageRepository: Send + Sync {
    /// Create or overwrite the record for `page_id`
    ///
    /// Must only return `Ok` once the write is durable enough that a
    /// following `get` with the same id observes it.
    ///
    /// # Errors
    ///
    /// Returns `OrderingError::StoreUnavailable` if the write fails
    fn save(
        &self,
        page_id: &PageId,
        page: &OrderingPage,
    ) -> impl Future<Output = Result<(), OrderingError>> + Send;

    /// Fetch the record for `page_id`
    ///
    /// # Returns
    ///
    /// `Some(page)` if a record exists, `None` otherwise
    ///
    /// # Errors
    ///
    /// - `OrderingError::StoreUnavailable` if the store cannot be reached
    /// - `OrderingError::InvalidRecord` if the stored document cannot be decoded
    fn get(
        &self,
        page_id: &PageId,
    ) -> impl Future<Output = Result<Option<OrderingPage>, OrderingError>> + Send;
}

/// Port for the publish sink
///
/// Best-effort, single-shot emission of one event. No retries are expected
/// from implementations beyond what the underlying client does by default.
pub trait EventPublisher: Send + Sync {
    /// Publish `event` to `topic` and return the sink-assigned message id
    ///
    /// # Errors
    ///
    /// Returns `OrderingError::PublishFailed` carrying the sink's message
    fn publish(
        &self,
        topic: &TopicPath,
        event: &LikeEvent,
    ) -> impl Future<Output = Result<String, OrderingError>> + Send;
}
