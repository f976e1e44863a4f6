//! Domain entities for ordering pages
//!
//! An OrderingPage is the only persisted record in Junban: a shuffled list of
//! names plus the flag that enables like controls for its viewers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted, shuffled list of names
///
/// Pages are:
/// - **Immutable**: `names` and `enable_likes` never change after creation
/// - **Verbatim**: retrieval returns the stored order, never a re-shuffle
/// - **Non-empty**: creation requires at least one name
///
/// The serialized shape is the stored document:
/// `{"names": [..], "enableLikes": bool, "createdAt": RFC 3339}`.
/// Documents missing `names` or `enableLikes` decode to an empty list and
/// `false` respectively.
///
/// # Example
///
/// ```rust
/// use junban_domain::ordering::OrderingPage;
///
/// let page = OrderingPage::new(vec!["Alice".to_string()], true).unwrap();
/// assert_eq!(page.names(), ["Alice"]);
/// assert!(OrderingPage::new(Vec::new(), false).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderingPage {
    /// Names in their shuffled, display order
    #[serde(default)]
    names: Vec<String>,

    /// Whether viewers may like entries on this page
    #[serde(default)]
    enable_likes: bool,

    /// Creation timestamp, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

impl OrderingPage {
    /// Create a new page from an already shuffled list of names
    ///
    /// Returns `None` when `names` is empty.
    pub fn new(names: Vec<String>, enable_likes: bool) -> Option<Self> {
        if names.is_empty() {
            return None;
        }

        Some(Self {
            names,
            enable_likes,
            created_at: Some(Utc::now()),
        })
    }

    /// Create a page with explicit values (used for reconstruction)
    pub fn from_parts(
        names: Vec<String>,
        enable_likes: bool,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            names,
            enable_likes,
            created_at,
        }
    }

    /// Names in stored order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether like controls are enabled
    pub fn enable_likes(&self) -> bool {
        self.enable_likes
    }

    /// Get the creation timestamp, if the stored record carried one
    pub fn created_at(&self) -> Option<&DateTime<Utc>> {
        self.created_at.as_ref()
    }

    /// Consume the page and return its names
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}
