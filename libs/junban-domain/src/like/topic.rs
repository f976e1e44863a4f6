use std::fmt;

/// Fully qualified destination for like events
///
/// Derived from a project identifier and a topic name. `Display` renders the
/// canonical path `projects/{project}/topics/{topic}`; brokers that reject
/// `/` in topic names use [`TopicPath::broker_topic`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicPath {
    project_id: String,
    topic_id: String,
}

impl TopicPath {
    /// Create a topic path from its parts
    pub fn new(project_id: impl Into<String>, topic_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            topic_id: topic_id.into(),
        }
    }

    /// Build a topic path only when both parts are configured and non-blank
    pub fn from_config(project_id: Option<&str>, topic_id: Option<&str>) -> Option<Self> {
        let project_id = project_id.map(str::trim).filter(|s| !s.is_empty())?;
        let topic_id = topic_id.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self::new(project_id, topic_id))
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }

    /// Broker-legal topic name: `{project}.{topic}`
    pub fn broker_topic(&self) -> String {
        format!("{}.{}", self.project_id, self.topic_id)
    }
}

impl fmt::Display for TopicPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "projects/{}/topics/{}", self.project_id, self.topic_id)
    }
}
