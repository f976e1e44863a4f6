use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an ordering page
///
/// PageId is a wrapper around a random (v4) UUID. It is the external lookup
/// key of a page and is never checked for collisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(Uuid);

impl PageId {
    /// Generate a new random PageId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a PageId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID value
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for PageId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<PageId> for Uuid {
    fn from(id: PageId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_generation() {
        let id1 = PageId::new();
        let id2 = PageId::new();

        assert_ne!(id1, id2, "Each PageId should be unique");
        assert_eq!(id1.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_page_id_display_parse() {
        let id = PageId::new();
        let display_str = id.to_string();

        assert_eq!(display_str.len(), 36);
        assert_eq!(display_str.parse::<PageId>().unwrap(), id);
    }

    #[test]
    fn test_page_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<PageId>().is_err());
        assert!("".parse::<PageId>().is_err());
    }
}
