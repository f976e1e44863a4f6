//! Infrastructure adapters backed by Kafka

mod event_publisher;

pub use event_publisher::KafkaEventPublisher;
