//! Backend Client
//!
//! Interface to the remote content, image, and LinkedIn posting service. The HTTP
//! implementation speaks the `/api/v1` JSON contract; `MockBackend` scripts responses
//! for tests and offline runs.

use crate::error::ApiError;
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

pub const GENERATE_CONTENT_PATH: &str = "/api/v1/generate-content";
pub const GENERATE_IMAGE_PATH: &str = "/api/v1/generate-image";
pub const POST_LINKEDIN_PATH: &str = "/api/v1/post-linkedin";

/// Body of both generation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuery {
    pub query: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GenerateContentResponse {
    content: String,
}

/// Body of the posting endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    pub generated_content: String,
    pub image_path: String,
}

/// Posting endpoint response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishReceipt {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PublishReceipt {
    pub fn accepted(status: impl Into<String>) -> Self {
        Self {
            success: true,
            status: status.into(),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            status: String::new(),
            error: Some(error.into()),
        }
    }
}

/// Remote service used by the orchestrators.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Generate post text for a prompt
    async fn generate_content(&self, query: &str) -> Result<String, ApiError>;

    /// Generate an image for a prompt; returns the raw image bytes
    async fn generate_image(&self, query: &str) -> Result<Vec<u8>, ApiError>;

    /// Publish a post
    async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt, ApiError>;

    /// Human-readable location of the backend
    fn endpoint(&self) -> &str;
}

fn map_http_error(error: reqwest::Error) -> ApiError {
    if let Some(status) = error.status() {
        ApiError::BackendStatus {
            status: status.as_u16(),
            body: error.to_string(),
        }
    } else if error.is_timeout() {
        ApiError::BackendRequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::BackendRequestFailed(format!("Connection error: {}", error))
    } else if error.is_decode() {
        ApiError::BackendDecode(error.to_string())
    } else {
        ApiError::BackendError(format!("HTTP error: {}", error))
    }
}

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// reqwest-backed client for the `/api/v1` endpoints.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeouts(base_url, DEFAULT_CONNECT_TIMEOUT, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_timeouts(
        base_url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .no_proxy()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| ApiError::BackendError(format!("Failed to create HTTP client: {}", e)))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url(path);
        debug!(url = %url, "Sending backend request");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::BackendStatus {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn generate_content(&self, query: &str) -> Result<String, ApiError> {
        let body = GenerateQuery {
            query: query.to_string(),
        };
        let response = self.post_json(GENERATE_CONTENT_PATH, &body).await?;
        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ApiError::BackendDecode(format!("generate-content: {}", e)))?;
        Ok(parsed.content)
    }

    async fn generate_image(&self, query: &str) -> Result<Vec<u8>, ApiError> {
        let body = GenerateQuery {
            query: query.to_string(),
        };
        let response = self.post_json(GENERATE_IMAGE_PATH, &body).await?;
        let bytes = response.bytes().await.map_err(map_http_error)?;
        if bytes.is_empty() {
            return Err(ApiError::BackendDecode(
                "generate-image returned an empty body".to_string(),
            ));
        }
        Ok(bytes.to_vec())
    }

    async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt, ApiError> {
        let response = self.post_json(POST_LINKEDIN_PATH, request).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::BackendDecode(format!("post-linkedin: {}", e)))
    }

    fn endpoint(&self) -> &str {
        &self.base_url
    }
}

/// Scripted backend. Each call pops the next scripted outcome; once a script is
/// exhausted, generation calls fail with a connection error and publishes succeed.
#[derive(Default)]
pub struct MockBackend {
    contents: Mutex<VecDeque<Result<String, String>>>,
    images: Mutex<VecDeque<Result<Vec<u8>, String>>>,
    receipts: Mutex<VecDeque<Result<PublishReceipt, String>>>,
    published: Mutex<Vec<PublishRequest>>,
    calls: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(self, outcome: Result<&str, &str>) -> Self {
        self.contents
            .lock()
            .push_back(outcome.map(str::to_string).map_err(str::to_string));
        self
    }

    pub fn with_image(self, outcome: Result<Vec<u8>, &str>) -> Self {
        self.images.lock().push_back(outcome.map_err(str::to_string));
        self
    }

    pub fn with_receipt(self, outcome: Result<PublishReceipt, &str>) -> Self {
        self.receipts
            .lock()
            .push_back(outcome.map_err(str::to_string));
        self
    }

    /// Total number of calls received, across all endpoints.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Publish requests received, in order.
    pub fn published(&self) -> Vec<PublishRequest> {
        self.published.lock().clone()
    }

    fn unreachable() -> ApiError {
        ApiError::BackendRequestFailed("Connection error: mock backend unreachable".to_string())
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn generate_content(&self, _query: &str) -> Result<String, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.contents.lock().pop_front() {
            Some(Ok(content)) => Ok(content),
            Some(Err(e)) => Err(ApiError::BackendRequestFailed(e)),
            None => Err(Self::unreachable()),
        }
    }

    async fn generate_image(&self, _query: &str) -> Result<Vec<u8>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.images.lock().pop_front() {
            Some(Ok(bytes)) => Ok(bytes),
            Some(Err(e)) => Err(ApiError::BackendRequestFailed(e)),
            None => Err(Self::unreachable()),
        }
    }

    async fn publish(&self, request: &PublishRequest) -> Result<PublishReceipt, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.published.lock().push(request.clone());
        match self.receipts.lock().pop_front() {
            Some(Ok(receipt)) => Ok(receipt),
            Some(Err(e)) => Err(ApiError::BackendRequestFailed(e)),
            None => Ok(PublishReceipt::accepted("Posted")),
        }
    }

    fn endpoint(&self) -> &str {
        "mock://backend"
    }
}
