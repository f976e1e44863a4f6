//! In-memory adapters for tests and local demos
//!
//! Real adapters (S3, Kafka) live in their own crates. These fakes keep
//! everything in process and expose knobs to simulate outages.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::like::{LikeEvent, TopicPath};
use crate::ordering::{OrderingError, OrderingPage, PageId};
use crate::ports::{EventPublisher, PageRepository};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Document store kept in a shared `HashMap`
///
/// Clones share the same map, so a test can keep a handle after moving one
/// into the service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPageRepository {
    pages: Arc<Mutex<HashMap<PageId, OrderingPage>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryPageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `StoreUnavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Insert a record directly, bypassing the service
    pub fn insert(&self, page_id: PageId, page: OrderingPage) {
        lock(&self.pages).insert(page_id, page);
    }

    pub fn len(&self) -> usize {
        lock(&self.pages).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> Result<(), OrderingError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(OrderingError::store_unavailable("in-memory store offline"));
        }
        Ok(())
    }
}

impl PageRepository for InMemoryPageRepository {
    fn save(
        &self,
        page_id: &PageId,
        page: &OrderingPage,
    ) -> impl Future<Output = Result<(), OrderingError>> + Send {
        let result = self.check_available().map(|()| {
            lock(&self.pages).insert(*page_id, page.clone());
        });

        async move { result }
    }

    fn get(
        &self,
        page_id: &PageId,
    ) -> impl Future<Output = Result<Option<OrderingPage>, OrderingError>> + Send {
        let result = self
            .check_available()
            .map(|()| lock(&self.pages).get(page_id).cloned());

        async move { result }
    }
}

/// Publisher that records every event and hands out sequential message ids
#[derive(Debug, Clone, Default)]
pub struct RecordingPublisher {
    events: Arc<Mutex<Vec<(TopicPath, LikeEvent)>>>,
    next_id: Arc<AtomicU64>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events published so far, oldest first
    pub fn events(&self) -> Vec<(TopicPath, LikeEvent)> {
        lock(&self.events).clone()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(
        &self,
        topic: &TopicPath,
        event: &LikeEvent,
    ) -> impl Future<Output = Result<String, OrderingError>> + Send {
        lock(&self.events).push((topic.clone(), event.clone()));
        let message_id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;

        async move { Ok(message_id.to_string()) }
    }
}

/// Publisher whose every call fails with the configured message
#[derive(Debug, Clone)]
pub struct FailingPublisher {
    message: String,
}

impl FailingPublisher {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl EventPublisher for FailingPublisher {
    fn publish(
        &self,
        _topic: &TopicPath,
        _event: &LikeEvent,
    ) -> impl Future<Output = Result<String, OrderingError>> + Send {
        let err = OrderingError::publish_failed(self.message.clone());
        async move { Err(err) }
    }
}
