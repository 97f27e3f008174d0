//! Error types for infographic generation.
//!
//! Every error here is recoverable: the UI shows [`Error::user_message`] in
//! its error region and returns to the ready state.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prefix shown to the user for any failed generation attempt.
pub const GENERATION_FAILED_PREFIX: &str =
    "Failed to generate infographic. Please try again later.";

/// Message shown to the user when the clipboard write fails.
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy to clipboard";

/// Message shown to the user when the download cannot be started.
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to download infographic";

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any network call.
    Validation,
    /// The webhook call failed or returned nothing usable.
    Generation,
    /// Clipboard access was denied or unavailable.
    Clipboard,
    /// The download file could not be offered.
    Export,
    /// The preference store could not be written.
    Storage,
    /// Invalid client configuration.
    Configuration,
}

/// Errors that can occur while generating or exporting an infographic.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was empty after trimming.
    #[error("Please enter a valid YouTube URL.")]
    EmptyUrl,

    /// The input does not look like a YouTube video URL.
    #[error("Please enter a valid YouTube video URL.")]
    InvalidUrl(String),

    /// The webhook answered with a non-success status code.
    #[error("Server error: {status}")]
    Server {
        /// HTTP status code returned by the webhook.
        status: u16,
    },

    /// The webhook answered successfully but with an empty body.
    #[error("No HTML content received from the server.")]
    EmptyResponse,

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// Writing to the clipboard failed.
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    /// Building the download file failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// Preference storage is unavailable or rejected the write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Classify this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyUrl | Self::InvalidUrl(_) => ErrorKind::Validation,
            Self::Server { .. }
            | Self::EmptyResponse
            | Self::Transport(_)
            | Self::Serialization(_) => ErrorKind::Generation,
            Self::Clipboard(_) => ErrorKind::Clipboard,
            Self::Export(_) => ErrorKind::Export,
            Self::Storage(_) => ErrorKind::Storage,
            Self::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// The single-line message shown in the error region.
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::Storage | ErrorKind::Configuration => {
                self.to_string()
            }
            ErrorKind::Generation => format!("{GENERATION_FAILED_PREFIX} {self}"),
            ErrorKind::Clipboard => COPY_FAILED_MESSAGE.to_string(),
            ErrorKind::Export => DOWNLOAD_FAILED_MESSAGE.to_string(),
        }
    }
}
