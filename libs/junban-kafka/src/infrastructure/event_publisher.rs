//! Kafka Event Publisher Implementation
//!
//! This module implements the `EventPublisher` trait with an rdkafka
//! `FutureProducer`. Each like becomes one record whose payload is the JSON
//! event and whose key is the page id.

use std::time::Duration;

use junban_domain::{
    like::{LikeEvent, TopicPath},
    ordering::OrderingError,
    ports::EventPublisher,
};
use rdkafka::{
    config::ClientConfig,
    error::KafkaError,
    producer::{FutureProducer, FutureRecord},
};
use tracing::{debug, error, info, instrument, Instrument, Span};

const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Kafka-based implementation of the EventPublisher port
///
/// The record lands on [`TopicPath::broker_topic`]. The returned message id
/// is `{partition}-{offset}` as acknowledged by the broker.
#[derive(Clone)]
pub struct KafkaEventPublisher {
    producer: FutureProducer,
    send_timeout: Duration,
}

impl KafkaEventPublisher {
    /// Create a publisher connected to `brokers`
    ///
    /// Creating the producer does not contact the brokers; connection
    /// problems surface on the first publish.
    pub fn new(brokers: &str) -> Result<Self, KafkaError> {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .set("acks", "all");

        Self::with_config(&config)
    }

    /// Create a publisher from a prepared client configuration
    pub fn with_config(config: &ClientConfig) -> Result<Self, KafkaError> {
        let producer: FutureProducer = config.create()?;
        info!("Initializing KafkaEventPublisher");

        Ok(Self {
            producer,
            send_timeout: DEFAULT_SEND_TIMEOUT,
        })
    }

    /// Override how long a send may wait for local queue space
    pub fn with_send_timeout(mut self, send_timeout: Duration) -> Self {
        self.send_timeout = send_timeout;
        self
    }
}

impl EventPublisher for KafkaEventPublisher {
    #[instrument(skip(self, topic, event), fields(topic = %topic, page_id = %event.page_id))]
    fn publish(
        &self,
        topic: &TopicPath,
        event: &LikeEvent,
    ) -> impl std::future::Future<Output = Result<String, OrderingError>> + Send {
        let producer = self.producer.clone();
        let send_timeout = self.send_timeout;
        let topic_name = topic.broker_topic();
        let key = event.page_id.clone();
        let payload = serde_json::to_vec(event);

        async move {
            let payload = payload.map_err(|err| {
                OrderingError::publish_failed(format!("Failed to encode like event: {}", err))
            })?;

            let record = FutureRecord::to(&topic_name)
                .key(key.as_str())
                .payload(payload.as_slice());

            match producer.send(record, send_timeout).await {
                Ok((partition, offset)) => {
                    let message_id = format!("{}-{}", partition, offset);
                    debug!(
                        topic = %topic_name,
                        message_id = %message_id,
                        payload_size = payload.len(),
                        "Successfully published like event"
                    );
                    Ok(message_id)
                }
                Err((err, _)) => {
                    error!(topic = %topic_name, error = %err, "Failed to publish like event");
                    Err(OrderingError::publish_failed(err.to_string()))
                }
            }
        }
        .instrument(Span::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdkafka::mocking::MockCluster;
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_publish_to_mock_cluster() {
        let cluster = MockCluster::new(1).unwrap();
        cluster.create_topic("proj.likes", 1, 1).unwrap();

        let publisher = KafkaEventPublisher::new(&cluster.bootstrap_servers()).unwrap();
        let topic = TopicPath::new("proj", "likes");

        let first = publisher
            .publish(&topic, &LikeEvent::new("p1", "Alice"))
            .await
            .unwrap();
        let second = publisher
            .publish(&topic, &LikeEvent::new("p1", "Bob"))
            .await
            .unwrap();

        assert_eq!(first, "0-0");
        assert_eq!(second, "0-1");
    }

    #[tokio::test]
    async fn test_publish_unreachable_broker_fails() {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", "127.0.0.1:1")
            .set("message.timeout.ms", "500");
        let publisher = KafkaEventPublisher::with_config(&config)
            .unwrap()
            .with_send_timeout(Duration::from_millis(500));

        let err = publisher
            .publish(&TopicPath::new("proj", "likes"), &LikeEvent::new("p1", "Alice"))
            .await
            .unwrap_err();

        match err {
            OrderingError::PublishFailed(message) => assert!(!message.is_empty()),
            other => panic!("expected PublishFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_publish_logs_carry_page_id_span() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let cluster = MockCluster::new(1).unwrap();
        cluster.create_topic("proj.likes", 1, 1).unwrap();
        let publisher = KafkaEventPublisher::new(&cluster.bootstrap_servers()).unwrap();

        publisher
            .publish(
                &TopicPath::new("proj", "likes"),
                &LikeEvent::new("page-42", "Alice"),
            )
            .await
            .unwrap();

        let output = logs.contents();
        let line = output
            .lines()
            .find(|line| line.contains("Successfully published like event"))
            .unwrap();
        assert!(line.contains("page_id=page-42"), "{line}");
    }
}
