//! Infographic Generator Core Library
//!
//! Platform-independent logic behind the infographic widget:
//! - `YouTube` URL shape validation
//! - Webhook request/response handling over a pluggable transport
//! - Generator panel view state
//! - Standalone HTML export
//! - Theme preference switching over a pluggable store
//! - Build-time client configuration
//!
//! # Error Handling
//!
//! All fallible operations return [`Result`]. Every [`Error`] is recoverable
//! and carries a user-facing message via [`Error::user_message`].
//!
//! ```rust,ignore
//! use infographic_core::{ClientConfig, GenerationClient};
//!
//! let client = GenerationClient::new(ClientConfig::from_build_env(), transport);
//! match client.submit(&input).await {
//!     Ok(result) => show(result.markup()),
//!     Err(e) => show_error(&e.user_message()),
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod generation;
pub mod state;
pub mod theme;
pub mod youtube;

pub use config::{
    ClientConfig, DEFAULT_COPY_FEEDBACK_MS, DEFAULT_DOWNLOAD_FILENAME, DEFAULT_SHAKE_DURATION_MS,
    DEFAULT_WEBHOOK_URL,
};
pub use error::{
    COPY_FAILED_MESSAGE, DOWNLOAD_FAILED_MESSAGE, Error, ErrorKind, GENERATION_FAILED_PREFIX,
    Result,
};
pub use export::{DOWNLOAD_MIME_TYPE, standalone_document};
pub use generation::{
    GenerationClient, GenerationRequest, GenerationResult, TransportResponse, WebhookTransport,
};
pub use state::GenerationState;
pub use theme::{MemoryPreferenceStore, PreferenceStore, THEME_STORAGE_KEY, Theme, ThemeSwitcher};
pub use youtube::{YOUTUBE_URL_PATTERN, is_valid_youtube_url, validate_youtube_url};
