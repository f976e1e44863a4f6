//! # Junban Kafka Adapter
//!
//! Publish adapter backing the `EventPublisher` port with a Kafka producer.

pub mod infrastructure;
