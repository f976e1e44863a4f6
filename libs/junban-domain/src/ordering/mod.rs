//! Ordering domain module
//!
//! This module contains the core business logic and entities for ordering
//! pages: how submitted text becomes a shuffled page and how pages are read back.

mod entity;
mod error;
mod ids;
mod names;
mod service;

pub use entity::OrderingPage;
pub use error::{OrderingError, Result};
pub use ids::PageId;
pub use names::{normalize_names, shuffle_names};
pub use service::{prepare_page, OrderingService, SubmitOutcome};
