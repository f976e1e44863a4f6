//! Junban Web - Shuffled ordering pages
//!
//! HTTP service that turns a submitted list of names into a randomly ordered,
//! shareable page. Pages live in an S3-compatible document store; likes are
//! published to Kafka when messaging is configured.

mod config;
mod dto;
mod handlers;
mod routes;
mod telemetry;
mod templates;

use anyhow::Result;
use clap::Parser;
use junban_domain::ordering::OrderingService;
use junban_kafka::infrastructure::KafkaEventPublisher;
use junban_s3::infrastructure::S3PageRepository;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;

/// Application state shared across handlers
pub struct AppState<R, P> {
    pub ordering_service: Arc<OrderingService<R, P>>,
}

impl<R, P> Clone for AppState<R, P> {
    fn clone(&self) -> Self {
        Self {
            ordering_service: Arc::clone(&self.ordering_service),
        }
    }
}

/// Build the publisher if brokers are configured
///
/// A producer that cannot be created disables likes instead of failing startup.
fn build_publisher(config: &Config) -> Option<KafkaEventPublisher> {
    let Some(brokers) = config.kafka_brokers() else {
        warn!("KAFKA_BROKERS not set, like events will be ignored");
        return None;
    };

    match KafkaEventPublisher::new(brokers) {
        Ok(publisher) => {
            info!(brokers = %brokers, "Kafka publisher ready");
            Some(publisher)
        }
        Err(err) => {
            warn!(error = %err, "Could not create Kafka producer, like events will be ignored");
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before reading configuration
    dotenvy::dotenv().ok();

    let config = Config::parse();

    // Initialize tracing
    telemetry::init(config.log_format);

    info!("Starting Junban web service");

    info!(
        bucket = %config.bucket,
        collection = %config.collection,
        "Initializing S3 page repository"
    );
    let repository =
        S3PageRepository::from_env(config.bucket.clone(), config.collection.clone()).await;

    let publisher = build_publisher(&config);
    let topic = config.topic();
    match &topic {
        Some(topic) => info!(topic = %topic, "Like events topic configured"),
        None => warn!(
            "GOOGLE_CLOUD_PROJECT or PUBSUB_TOPIC_ID not set, like events will be ignored"
        ),
    }

    // Create ordering service
    let service = OrderingService::new(repository, publisher, topic);

    // Create shared application state
    let state = AppState {
        ordering_service: Arc::new(service),
    };

    // Build HTTP router
    let app = routes::create_router(state, &config.static_dir);

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
