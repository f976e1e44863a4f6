//! # Junban Domain Layer
//!
//! This crate contains the pure business logic and domain models for Junban,
//! a service that shuffles a list of names into a shareable ordering page.
//! It follows hexagonal architecture principles:
//!
//! - **Entities**: Core domain models (OrderingPage, LikeEvent)
//! - **Ports**: Trait definitions for external dependencies (PageRepository, EventPublisher)
//! - **Services**: Business logic orchestration (OrderingService)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (AWS, Kafka, HTTP, etc.).
//! All external dependencies are expressed as traits (ports) that will be implemented
//! by adapter layers.
//!
//! ## Example
//!
//! ```rust
//! use junban_domain::ordering::{OrderingService, SubmitOutcome};
//! use junban_domain::ports::{EventPublisher, PageRepository};
//!
//! // The service is generic over any PageRepository / EventPublisher pair
//! async fn example<R: PageRepository, P: EventPublisher>(service: OrderingService<R, P>) {
//!     if let Ok(SubmitOutcome::Created(page_id)) = service.submit("Alice\nBob", true).await {
//!         println!("Created page: {}", page_id);
//!     }
//! }
//! ```

pub mod like;
pub mod ordering;
pub mod ports;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types
pub use like::{LikeEvent, LikeOutcome, TopicPath};
pub use ordering::{OrderingError, OrderingPage, OrderingService, PageId, SubmitOutcome};
pub use ports::{EventPublisher, PageRepository};
