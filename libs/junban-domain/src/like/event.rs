use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An ephemeral like, emitted once and never stored
///
/// Neither `page_id` nor `subject_id` is checked against the document store;
/// any strings are accepted. The serialized form is the wire payload:
/// `{"timestamp": ISO-8601, "pageId": string, "id": string}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeEvent {
    /// Emission time
    pub timestamp: DateTime<Utc>,

    /// Page the liked entry belongs to
    pub page_id: String,

    /// The liked name or identifier
    #[serde(rename = "id")]
    pub subject_id: String,
}

impl LikeEvent {
    /// Build an event stamped with the current time
    pub fn new(page_id: impl Into<String>, subject_id: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            page_id: page_id.into(),
            subject_id: subject_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_event_payload_shape() {
        let event = LikeEvent::new("p1", "Alice");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["pageId"], "p1");
        assert_eq!(json["id"], "Alice");

        let timestamp = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_like_event_accepts_any_strings() {
        let event = LikeEvent::new("", "not on any page");
        assert_eq!(event.page_id, "");
        assert_eq!(event.subject_id, "not on any page");
    }
}
