//! Infographic generation over the webhook.
//!
//! [`GenerationClient::submit`] validates the input first and only then issues
//! exactly one request through a [`WebhookTransport`]. Nothing is retried.
//!
//! ```rust,ignore
//! let client = GenerationClient::new(ClientConfig::default(), FetchTransport);
//! let result = client.submit("https://youtu.be/abc123").await?;
//! render(result.markup());
//! ```

use std::future::Future;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::youtube::validate_youtube_url;

/// JSON payload sent to the webhook.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GenerationRequest {
    /// The trimmed video URL.
    #[serde(rename = "youtubeUrl")]
    pub youtube_url: String,
}

impl GenerationRequest {
    /// Validate raw user input and build a request from it.
    pub fn from_input(raw: &str) -> Result<Self> {
        let url = validate_youtube_url(raw)?;
        Ok(Self {
            youtube_url: url.to_string(),
        })
    }

    /// Serialize to the wire body.
    pub fn to_body(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Markup fragment returned by the webhook.
///
/// Treated as opaque: any non-empty body is accepted without checking it is
/// well-formed HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult(String);

impl GenerationResult {
    /// Wrap a markup fragment.
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The raw markup fragment.
    pub fn markup(&self) -> &str {
        &self.0
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }
}

/// Sends a JSON body to an endpoint and returns the raw response.
///
/// Implementations report network-level failures as [`Error::Transport`];
/// status codes are interpreted by the caller.
pub trait WebhookTransport {
    /// `POST` `body` to `url` with `Content-Type: application/json`.
    fn post_json(&self, url: &str, body: String)
    -> impl Future<Output = Result<TransportResponse>>;
}

/// Client that turns a video URL into an infographic fragment.
#[derive(Debug, Clone)]
pub struct GenerationClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T: WebhookTransport> GenerationClient<T> {
    /// Create a client for the configured webhook.
    pub const fn new(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// The client configuration.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying transport.
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate `raw` and request an infographic for it.
    ///
    /// Validation failures return before any request is made. A non-2xx
    /// status or an empty body are errors.
    pub async fn submit(&self, raw: &str) -> Result<GenerationResult> {
        let request = GenerationRequest::from_input(raw)?;
        self.send(&request).await
    }

    /// Issue one request for an already validated `request`.
    pub async fn send(&self, request: &GenerationRequest) -> Result<GenerationResult> {
        let body = request.to_body()?;

        info!("Requesting infographic for {}", request.youtube_url);
        let response = self
            .transport
            .post_json(&self.config.webhook_url, body)
            .await
            .inspect_err(|e| warn!("Webhook request failed: {}", e))?;

        if !response.is_success() {
            warn!("Webhook returned status {}", response.status);
            return Err(Error::Server {
                status: response.status,
            });
        }

        if response.body.is_empty() {
            warn!("Webhook returned an empty body");
            return Err(Error::EmptyResponse);
        }

        debug!("Received {} bytes of markup", response.body.len());
        Ok(GenerationResult(response.body))
    }
}
