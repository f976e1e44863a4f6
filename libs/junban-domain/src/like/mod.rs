//! Like domain module
//!
//! Viewers of a page with likes enabled may mark interest in an entry. Each
//! like becomes an ephemeral `LikeEvent` handed to the publish sink; nothing
//! is persisted.

mod event;
mod outcome;
mod topic;

pub use event::LikeEvent;
pub use outcome::{IgnoredReason, LikeOutcome};
pub use topic::TopicPath;
