//! Ordering service - Business logic orchestration
//!
//! This module owns the submit -> shuffle -> persist -> retrieve -> like
//! workflow. It coordinates between the domain entities, the document store
//! port and the publish port, and holds no shared mutable state of its own.

use rand::Rng;

use super::names::{normalize_names, shuffle_names};
use super::{OrderingError, OrderingPage, PageId, Result};
use crate::like::{IgnoredReason, LikeEvent, LikeOutcome, TopicPath};
use crate::ports::{EventPublisher, PageRepository};

/// Result of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A page was persisted under this id
    Created(PageId),
    /// Nothing usable remained after normalization; no record was written
    EmptyInput,
}

impl SubmitOutcome {
    /// The created page id, if any
    pub fn page_id(&self) -> Option<PageId> {
        match self {
            Self::Created(id) => Some(*id),
            Self::EmptyInput => None,
        }
    }
}

/// Normalize and shuffle submitted text into a new page
///
/// Returns `None` when the text holds no non-blank lines.
pub fn prepare_page<G: Rng + ?Sized>(
    raw_text: &str,
    enable_likes: bool,
    rng: &mut G,
) -> Option<OrderingPage> {
    let mut names = normalize_names(raw_text);
    shuffle_names(&mut names, rng);
    OrderingPage::new(names, enable_likes)
}

/// Service for creating and viewing shuffled ordering pages
///
/// Business rules:
/// - Submitted text is split into trimmed, non-empty lines and shuffled
///   uniformly before it is stored
/// - A page id is only handed out after the store accepted the write
/// - Stored pages are returned verbatim, never re-shuffled
/// - Likes are fire-and-forget; missing publish configuration is tolerated
///
/// ## Static Dispatch
///
/// The service is generic over its `PageRepository` and `EventPublisher`.
/// Both are injected at construction so tests can swap in fakes.
pub struct OrderingService<R, P> {
    repository: R,
    publisher: Option<P>,
    topic: Option<TopicPath>,
}

impl<R, P> OrderingService<R, P>
where
    R: PageRepository,
    P: EventPublisher,
{
    /// Create a new OrderingService
    ///
    /// `publisher` and `topic` may be absent; likes are then ignored.
    pub fn new(repository: R, publisher: Option<P>, topic: Option<TopicPath>) -> Self {
        Self {
            repository,
            publisher,
            topic,
        }
    }

    /// Create a service that stores pages but never publishes likes
    pub fn with_repository(repository: R) -> Self {
        Self::new(repository, None, None)
    }

    /// Submit free-form text and persist a shuffled page
    ///
    /// # Returns
    ///
    /// - `SubmitOutcome::Created(id)` once the page is stored
    /// - `SubmitOutcome::EmptyInput` if no names remain after normalization
    ///
    /// # Errors
    ///
    /// `OrderingError::StoreUnavailable` if the write fails
    pub async fn submit(&self, raw_text: &str, enable_likes: bool) -> Result<SubmitOutcome> {
        // ThreadRng is not Send; it must be gone before the first await.
        let page = {
            let mut rng = rand::thread_rng();
            prepare_page(raw_text, enable_likes, &mut rng)
        };

        match page {
            Some(page) => self.persist(page).await.map(SubmitOutcome::Created),
            None => Ok(SubmitOutcome::EmptyInput),
        }
    }

    /// Store an already prepared page under a fresh id
    pub async fn persist(&self, page: OrderingPage) -> Result<PageId> {
        let page_id = PageId::new();
        self.repository.save(&page_id, &page).await?;
        Ok(page_id)
    }

    /// Retrieve a stored page by its textual id
    ///
    /// An id that is not a valid UUID can never have been issued and is
    /// reported as not found.
    ///
    /// # Errors
    ///
    /// - `OrderingError::NotFound` if no page exists for the id
    /// - `OrderingError::StoreUnavailable` if the store cannot be reached
    pub async fn retrieve(&self, page_id: &str) -> Result<OrderingPage> {
        let id: PageId = page_id
            .parse()
            .map_err(|_| OrderingError::not_found(page_id))?;

        self.repository
            .get(&id)
            .await?
            .ok_or_else(|| OrderingError::not_found(page_id))
    }

    /// Record a like for `subject_id` on `page_id`
    ///
    /// Neither id is validated against stored pages.
    ///
    /// # Errors
    ///
    /// `OrderingError::PublishFailed` if a configured sink rejects the event
    pub async fn record_like(&self, page_id: &str, subject_id: &str) -> Result<LikeOutcome> {
        let Some(publisher) = &self.publisher else {
            return Ok(LikeOutcome::Ignored {
                reason: IgnoredReason::PublisherNotConfigured,
            });
        };
        let Some(topic) = &self.topic else {
            return Ok(LikeOutcome::Ignored {
                reason: IgnoredReason::TopicNotConfigured,
            });
        };

        let event = LikeEvent::new(page_id, subject_id);
        let message_id = publisher.publish(topic, &event).await?;

        Ok(LikeOutcome::Published { message_id })
    }

    /// Whether likes will actually reach a sink
    pub fn publishing_enabled(&self) -> bool {
        self.publisher.is_some() && self.topic.is_some()
    }

    /// Get the configured topic, if any
    pub fn topic(&self) -> Option<&TopicPath> {
        self.topic.as_ref()
    }
}
