//! Client configuration.
//!
//! The widget has no settings screen: everything here is fixed at build time.
//! The webhook endpoint can be swapped by setting `INFOGRAPHIC_WEBHOOK_URL`
//! when compiling.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Generation webhook used when no override is compiled in.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://sahil0333.app.n8n.cloud/webhook/generate-infographic";

/// File name offered for every download.
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "infographic.html";

/// How long the "Copied!" acknowledgment stays on the copy button.
pub const DEFAULT_COPY_FEEDBACK_MS: u32 = 2000;

/// How long the shake cue stays on the input area.
pub const DEFAULT_SHAKE_DURATION_MS: u32 = 500;

/// Build-time environment variable that overrides the webhook URL.
pub const WEBHOOK_URL_ENV: &str = "INFOGRAPHIC_WEBHOOK_URL";

/// Configuration for the generation client and its UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint that receives the `POST` request.
    pub webhook_url: String,
    /// Name of the downloaded file.
    #[serde(default = "default_download_filename")]
    pub download_filename: String,
    /// Copy acknowledgment duration in milliseconds.
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u32,
    /// Shake cue duration in milliseconds.
    #[serde(default = "default_shake_duration_ms")]
    pub shake_duration_ms: u32,
}

fn default_download_filename() -> String {
    DEFAULT_DOWNLOAD_FILENAME.to_string()
}

const fn default_copy_feedback_ms() -> u32 {
    DEFAULT_COPY_FEEDBACK_MS
}

const fn default_shake_duration_ms() -> u32 {
    DEFAULT_SHAKE_DURATION_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            webhook_url: DEFAULT_WEBHOOK_URL.to_string(),
            download_filename: default_download_filename(),
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
            shake_duration_ms: DEFAULT_SHAKE_DURATION_MS,
        }
    }
}

impl ClientConfig {
    /// Build the configuration baked in at compile time.
    ///
    /// Falls back to the defaults if the override is missing or invalid.
    pub fn from_build_env() -> Self {
        let config = Self::default().with_webhook_override(option_env!("INFOGRAPHIC_WEBHOOK_URL"));
        if let Err(e) = config.validate() {
            warn!("Ignoring {}: {}", WEBHOOK_URL_ENV, e);
            return Self::default();
        }
        debug!("Using webhook {}", config.webhook_url);
        config
    }

    /// Replace the webhook URL if `url` is present and non-blank.
    #[must_use]
    pub fn with_webhook_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.webhook_url = url.to_string();
        }
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        let url = self.webhook_url.to_lowercase();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(Error::Configuration(format!(
                "webhook URL must start with http:// or https://, got {}",
                self.webhook_url
            )));
        }
        if self.download_filename.trim().is_empty() {
            return Err(Error::Configuration(
                "download filename cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
        assert_eq!(config.download_filename, "infographic.html");
        assert_eq!(config.copy_feedback_ms, 2000);
        assert_eq!(config.shake_duration_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_webhook_override() {
        let config =
            ClientConfig::default().with_webhook_override(Some(" http://localhost:5678/hook "));
        assert_eq!(config.webhook_url, "http://localhost:5678/hook");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = ClientConfig::default().with_webhook_override(Some("   "));
        assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
        let config = ClientConfig::default().with_webhook_override(None);
        assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
    }

    #[test]
    fn test_validate_rejects_non_http() {
        let config = ClientConfig::default().with_webhook_override(Some("ws://example.com"));
        assert!(matches!(config.validate(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"webhook_url":"https://example.com/hook"}"#).unwrap();
        assert_eq!(config.webhook_url, "https://example.com/hook");
        assert_eq!(config.download_filename, DEFAULT_DOWNLOAD_FILENAME);
        assert_eq!(config.copy_feedback_ms, DEFAULT_COPY_FEEDBACK_MS);
    }
}
