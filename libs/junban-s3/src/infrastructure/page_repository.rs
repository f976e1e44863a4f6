//! S3 Page Repository Implementation
//!
//! This module implements the `PageRepository` trait using an S3-compatible
//! bucket as a key/value document store. It handles all S3 operations and
//! converts AWS errors to domain errors.

use aws_sdk_s3::{error::DisplayErrorContext, primitives::ByteStream, Client};
use bytes::Bytes;
use junban_domain::{
    ordering::{OrderingError, OrderingPage, PageId},
    ports::PageRepository,
};
use tracing::{debug, error, info, instrument, Instrument, Span};

/// S3-based implementation of the PageRepository port
///
/// Each page is one JSON document stored at `{collection}/{page_id}.json`.
/// Writes overwrite; reads of a missing key yield `None`.
///
/// ## Error Handling
///
/// Missing keys are not errors. Every other SDK failure becomes
/// `OrderingError::StoreUnavailable`, and undecodable documents become
/// `OrderingError::InvalidRecord`.
#[derive(Clone)]
pub struct S3PageRepository {
    client: Client,
    bucket: String,
    collection: String,
}

impl S3PageRepository {
    /// Create a new S3 page repository
    ///
    /// # Arguments
    ///
    /// * `client` - Configured AWS S3 client
    /// * `bucket` - Name of the S3 bucket to use
    /// * `collection` - Key prefix grouping page documents
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use aws_sdk_s3::Client;
    /// use junban_s3::infrastructure::S3PageRepository;
    ///
    /// # async fn example() {
    /// let config = aws_config::load_from_env().await;
    /// let s3_client = Client::new(&config);
    /// let repo = S3PageRepository::new(s3_client, "junban".to_string(), "junbanapp".to_string());
    /// # }
    /// ```
    pub fn new(client: Client, bucket: String, collection: String) -> Self {
        info!(bucket = %bucket, collection = %collection, "Initializing S3PageRepository");
        Self {
            client,
            bucket,
            collection,
        }
    }

    /// Build a repository from the ambient AWS configuration
    ///
    /// Uses path-style addressing so MinIO and other S3-compatible stores work.
    pub async fn from_env(bucket: String, collection: String) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
            .force_path_style(true)
            .build();

        Self::new(Client::from_conf(s3_config), bucket, collection)
    }

    /// Get the bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Get the collection prefix
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Generate the S3 key for a page
    fn generate_key(collection: &str, page_id: &PageId) -> String {
        format!("{}/{}.json", collection, page_id)
    }
}

/// Serialize a page into its stored JSON document
fn encode_page(page: &OrderingPage) -> Result<Bytes, OrderingError> {
    serde_json::to_vec(page)
        .map(Bytes::from)
        .map_err(|err| OrderingError::invalid_record(format!("encode failed: {}", err)))
}

/// Decode a stored JSON document
fn decode_page(key: &str, bytes: &[u8]) -> Result<OrderingPage, OrderingError> {
    serde_json::from_slice(bytes)
        .map_err(|err| OrderingError::invalid_record(format!("key '{}': {}", key, err)))
}

impl PageRepository for S3PageRepository {
    #[instrument(skip(self, page), fields(page_id = %page_id, names = page.names().len()))]
    fn save(
        &self,
        page_id: &PageId,
        page: &OrderingPage,
    ) -> impl std::future::Future<Output = Result<(), OrderingError>> + Send {
        let client = self.client.clone();
        let bucket = self.bucket.clone();
        let key = Self::generate_key(&self.collection, page_id);
        let body = encode_page(page);

        async move {
            let body = body?;
            debug!(key = %key, bucket = %bucket, size = body.len(), "Saving page to S3");

            match client
                .put_object()
                .bucket(&bucket)
                .key(&key)
                .content_type("application/json")
                .body(ByteStream::from(body))
                .send()
                .await
            {
                Ok(_) => {
                    info!(key = %key, "Successfully saved page to S3");
                    Ok(())
                }
                Err(err) => {
                    error!(key = %key, error = ?err, "Failed to save page to S3");
                    Err(OrderingError::store_unavailable(format!(
                        "S3 put_object failed for key '{}': {}",
                        key,
                        DisplayErrorContext(&err)
                    )))
                }
            }
        }
        .instrument(Span::current())
    }

    #[instrument(skip(self), fields(page_id = %page_id))]
    fn get(
        &self,
        page_id: &PageId,
    ) -> impl std::future::Future<Output = Result<Option<OrderingPage>, OrderingError>> + Send
    {
        let client = self.client.clone();
        let bucket = self.bucket.clone();
        let key = Self::generate_key(&self.collection, page_id);

        async move {
            debug!(key = %key, bucket = %bucket, "Retrieving page from S3");

            match client.get_object().bucket(&bucket).key(&key).send().await {
                Ok(output) => match output.body.collect().await {
                    Ok(data) => {
                        let bytes = data.into_bytes();
                        debug!(key = %key, size = bytes.len(), "Retrieved page from S3");
                        decode_page(&key, &bytes).map(Some)
                    }
                    Err(err) => {
                        error!(key = %key, error = ?err, "Failed to read S3 object body");
                        Err(OrderingError::store_unavailable(format!(
                            "Failed to read S3 object body for key '{}': {}",
                            key, err
                        )))
                    }
                },
                Err(err) => {
                    if err
                        .as_service_error()
                        .is_some_and(|service_err| service_err.is_no_such_key())
                    {
                        debug!(key = %key, "Page does not exist in S3");
                        return Ok(None);
                    }

                    error!(key = %key, error = ?err, "Failed to retrieve page from S3");
                    Err(OrderingError::store_unavailable(format!(
                        "S3 get_object failed for key '{}': {}",
                        key,
                        DisplayErrorContext(&err)
                    )))
                }
            }
        }
        .instrument(Span::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::config::{retry::RetryConfig, BehaviorVersion, Credentials, Region};
    use axum::{
        extract::{Path, State},
        http::{header, StatusCode},
        response::{IntoResponse, Response},
        routing::get,
        Router,
    };
    use chrono::{TimeZone, Utc};
    use std::{
        collections::HashMap,
        io,
        sync::{Arc, Mutex},
    };

    const OFFLINE_BUCKET: &str = "offline";

    const NO_SUCH_KEY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>NoSuchKey</Code><Message>The specified key does not exist.</Message><RequestId>local</RequestId></Error>"#;

    const INTERNAL_ERROR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>InternalError</Code><Message>We encountered an internal error.</Message><RequestId>local</RequestId></Error>"#;

    type Objects = Arc<Mutex<HashMap<String, Bytes>>>;

    fn xml_error(status: StatusCode, body: &'static str) -> Response {
        (status, [(header::CONTENT_TYPE, "application/xml")], body).into_response()
    }

    async fn put_object(
        State(objects): State<Objects>,
        Path((bucket, key)): Path<(String, String)>,
        body: Bytes,
    ) -> Response {
        if bucket == OFFLINE_BUCKET {
            return xml_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
        objects
            .lock()
            .unwrap()
            .insert(key.trim_start_matches('/').to_string(), body);
        StatusCode::OK.into_response()
    }

    async fn get_object(
        State(objects): State<Objects>,
        Path((bucket, key)): Path<(String, String)>,
    ) -> Response {
        if bucket == OFFLINE_BUCKET {
            return xml_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR);
        }
        let stored = objects
            .lock()
            .unwrap()
            .get(key.trim_start_matches('/'))
            .cloned();
        match stored {
            Some(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            None => xml_error(StatusCode::NOT_FOUND, NO_SUCH_KEY),
        }
    }

    /// Serve a minimal path-style S3 endpoint on a random local port
    async fn local_store() -> (String, Objects) {
        let objects = Objects::default();
        let app = Router::new()
            .route("/:bucket/*key", get(get_object).put(put_object))
            .with_state(objects.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (endpoint, objects)
    }

    fn client(endpoint: &str) -> Client {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("junban", "junban-secret", None, None, "test"))
            .endpoint_url(endpoint)
            .force_path_style(true)
            .retry_config(RetryConfig::disabled())
            .build();
        Client::from_conf(config)
    }

    fn repository(endpoint: &str, bucket: &str) -> S3PageRepository {
        S3PageRepository::new(client(endpoint), bucket.to_string(), "junbanapp".to_string())
    }

    fn sample_page() -> OrderingPage {
        OrderingPage::new(vec!["Carol".to_string(), "Alice".to_string()], true).unwrap()
    }

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
    async fn test_save_then_get_round_trip() {
        let (endpoint, objects) = local_store().await;
        let repo = repository(&endpoint, "junban");
        let page_id = PageId::new();
        let page = sample_page();

        repo.save(&page_id, &page).await.unwrap();

        let key = format!("junbanapp/{}.json", page_id);
        assert!(objects.lock().unwrap().contains_key(&key));
        assert_eq!(repo.get(&page_id).await.unwrap(), Some(page));
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let (endpoint, _objects) = local_store().await;
        let repo = repository(&endpoint, "junban");

        assert_eq!(repo.get(&PageId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_undecodable_document_is_invalid_record() {
        let (endpoint, objects) = local_store().await;
        let repo = repository(&endpoint, "junban");
        let page_id = PageId::new();
        objects.lock().unwrap().insert(
            format!("junbanapp/{}.json", page_id),
            Bytes::from_static(b"not json"),
        );

        let err = repo.get(&page_id).await.unwrap_err();
        assert!(matches!(err, OrderingError::InvalidRecord(_)));
    }

    #[tokio::test]
    async fn test_service_errors_are_store_unavailable() {
        let (endpoint, _objects) = local_store().await;
        let repo = repository(&endpoint, OFFLINE_BUCKET);
        let page_id = PageId::new();

        let err = repo.save(&page_id, &sample_page()).await.unwrap_err();
        assert!(matches!(err, OrderingError::StoreUnavailable(_)));

        let err = repo.get(&page_id).await.unwrap_err();
        assert!(matches!(err, OrderingError::StoreUnavailable(_)));
        assert!(!err.is_not_found());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_store_unavailable() {
        let repo = repository("http://127.0.0.1:1", "junban");
        let page_id = PageId::new();

        let err = repo.save(&page_id, &sample_page()).await.unwrap_err();
        assert!(matches!(err, OrderingError::StoreUnavailable(_)));
        assert!(err.to_string().contains(&page_id.to_string()));

        let err = repo.get(&page_id).await.unwrap_err();
        assert!(matches!(err, OrderingError::StoreUnavailable(_)));
    }

    #[tokio::test]
    async fn test_logs_carry_page_id_span() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let (endpoint, _objects) = local_store().await;
        let repo = repository(&endpoint, "junban");
        let page_id = PageId::new();
        repo.save(&page_id, &sample_page()).await.unwrap();
        repo.get(&page_id).await.unwrap();

        let output = logs.contents();
        let span_field = format!("page_id={}", page_id);
        for message in ["Saving page to S3", "Retrieving page from S3"] {
            let line = output
                .lines()
                .find(|line| line.contains(message))
                .unwrap_or_else(|| panic!("missing log line: {message}"));
            assert!(line.contains(&span_field), "{line}");
        }
    }

    #[test]
    fn test_generate_key_layout() {
        let page_id: PageId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
        assert_eq!(
            S3PageRepository::generate_key("junbanapp", &page_id),
            "junbanapp/67e55044-10b1-426f-9247-bb680e5fe0c8.json"
        );
    }

    #[test]
    fn test_encode_decode_document() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let page = OrderingPage::from_parts(
            vec!["Carol".to_string(), "Alice".to_string()],
            true,
            Some(created),
        );

        let bytes = encode_page(&page).unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(text.contains("\"enableLikes\":true"));

        let decoded = decode_page("k", &bytes).unwrap();
        assert_eq!(decoded, page);
    }

    #[test]
    fn test_decode_applies_defaults() {
        let decoded = decode_page("k", br#"{"createdAt":"2024-05-01T12:00:00Z"}"#).unwrap();
        assert!(decoded.names().is_empty());
        assert!(!decoded.enable_likes());
    }

    #[test]
    fn test_decode_garbage_is_invalid_record() {
        let err = decode_page("junbanapp/x.json", b"not json").unwrap_err();
        assert!(matches!(err, OrderingError::InvalidRecord(_)));
        assert!(err.to_string().contains("junbanapp/x.json"));
    }
}
