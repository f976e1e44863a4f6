//! Startup configuration
//!
//! Read once at boot from flags or the environment (a `.env` file is loaded
//! first). Missing messaging settings are valid and only disable likes.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use junban_domain::like::TopicPath;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "junban-web")]
#[command(about = "Shuffle a list of names into a shareable ordering page")]
pub struct Config {
    #[arg(long, env = "JUNBAN_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Bucket holding page documents
    #[arg(long, env = "JUNBAN_BUCKET", default_value = "junban")]
    pub bucket: String,

    /// Key prefix for page documents
    #[arg(long, env = "JUNBAN_COLLECTION", default_value = "junbanapp")]
    pub collection: String,

    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: Option<String>,

    #[arg(long, env = "PUBSUB_TOPIC_ID")]
    pub topic_id: Option<String>,

    /// Kafka bootstrap servers; likes are ignored when unset
    #[arg(long, env = "KAFKA_BROKERS")]
    pub kafka_brokers: Option<String>,

    /// Directory served under `/static`
    #[arg(long, env = "JUNBAN_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    #[arg(long, env = "JUNBAN_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Topic for like events, if both project and topic are set
    pub fn topic(&self) -> Option<TopicPath> {
        TopicPath::from_config(self.project_id.as_deref(), self.topic_id.as_deref())
    }

    /// Broker list, ignoring blank values
    pub fn kafka_brokers(&self) -> Option<&str> {
        self.kafka_brokers
            .as_deref()
            .map(str::trim)
            .filter(|brokers| !brokers.is_empty())
    }
}
