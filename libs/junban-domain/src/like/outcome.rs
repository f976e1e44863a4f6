use std::fmt;

/// Why a like was accepted without being published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// No publish sink was set up at startup
    PublisherNotConfigured,
    /// A sink exists but no project/topic was configured
    TopicNotConfigured,
}

impl fmt::Display for IgnoredReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PublisherNotConfigured => f.write_str("publisher not configured"),
            Self::TopicNotConfigured => f.write_str("topic not configured"),
        }
    }
}

/// Result of recording a like
///
/// Missing messaging infrastructure never fails the caller; it yields
/// `Ignored` so viewing pages keep working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeOutcome {
    /// The sink acknowledged the event with this message id
    Published { message_id: String },
    /// The event was dropped because publishing is not configured
    Ignored { reason: IgnoredReason },
}

impl LikeOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. })
    }
}
