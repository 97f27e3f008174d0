//! View state of the generator panel.
//!
//! The UI keeps one [`GenerationState`] in a signal and drives each attempt
//! through [`start`](GenerationState::start), which validates before touching
//! the panel, and [`complete`](GenerationState::complete), which records the
//! outcome and always clears the busy flag.

use tracing::debug;

use crate::error::{Error, Result};
use crate::generation::{GenerationRequest, GenerationResult};

/// Everything the generator panel renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationState {
    busy: bool,
    result: Option<GenerationResult>,
    result_visible: bool,
    error: Option<String>,
}

impl GenerationState {
    /// Fresh, idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A request is in flight: the submit control is disabled and the
    /// loading indicator is shown.
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether the result region should be shown.
    pub const fn is_result_visible(&self) -> bool {
        self.result_visible && self.result.is_some()
    }

    /// The last successful result, if any. Export actions read this.
    pub const fn result(&self) -> Option<&GenerationResult> {
        self.result.as_ref()
    }

    /// Markup of the visible result.
    pub fn visible_markup(&self) -> Option<&str> {
        if self.is_result_visible() {
            self.result.as_ref().map(GenerationResult::markup)
        } else {
            None
        }
    }

    /// Message currently shown in the error region.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate `raw` and, if it passes, begin an attempt for it.
    ///
    /// Returns `Ok(None)` while another attempt is in flight, leaving the
    /// state untouched. Invalid input is shown in the error region but the
    /// current result stays visible.
    pub fn start(&mut self, raw: &str) -> Result<Option<GenerationRequest>> {
        if self.busy {
            debug!("Ignoring submit while a request is in flight");
            return Ok(None);
        }

        let request = GenerationRequest::from_input(raw).inspect_err(|e| self.fail(e))?;
        self.begin();
        Ok(Some(request))
    }

    /// Record the outcome of the attempt opened by [`start`](Self::start)
    /// and leave the busy state.
    ///
    /// A failure is recorded in the error region and handed back so the
    /// caller can cue it.
    pub fn complete(&mut self, outcome: Result<GenerationResult>) -> Result<()> {
        let recorded = match outcome {
            Ok(result) => {
                self.succeed(result);
                Ok(())
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        };
        self.finish();
        recorded
    }

    /// Start an attempt: clear the error, hide the old result, go busy.
    pub fn begin(&mut self) {
        self.error = None;
        self.result_visible = false;
        self.busy = true;
    }

    /// Replace the result wholesale and reveal it.
    pub fn succeed(&mut self, result: GenerationResult) {
        self.result = Some(result);
        self.result_visible = true;
    }

    /// Record a failure. The previous result stays hidden.
    pub fn fail(&mut self, error: &Error) {
        self.show_error(error.user_message());
    }

    /// Replace any prior message with `message`.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Final step of every attempt, whatever the outcome.
    pub const fn finish(&mut self) {
        self.busy = false;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GenerationState::new();
        assert!(!state.is_busy());
        assert!(!state.is_result_visible());
        assert!(state.result().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_successful_attempt() {
        let mut state = GenerationState::new();
        state.begin();
        assert!(state.is_busy());

        state.succeed(GenerationResult::new("<p>one</p>"));
        state.finish();

        assert!(!state.is_busy());
        assert_eq!(state.visible_markup(), Some("<p>one</p>"));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_new_result_replaces_old() {
        let mut state = GenerationState::new();
        state.begin();
        state.succeed(GenerationResult::new("<p>one</p>"));
        state.finish();

        state.begin();
        assert!(!state.is_result_visible());
        state.succeed(GenerationResult::new("<p>two</p>"));
        state.finish();

        assert_eq!(state.visible_markup(), Some("<p>two</p>"));
    }

    #[test]
    fn test_failed_attempt_returns_to_ready() {
        let mut state = GenerationState::new();
        state.begin();
        state.fail(&Error::Server { status: 503 });
        state.finish();

        assert!(!state.is_busy());
        assert!(!state.is_result_visible());
        assert_eq!(
            state.error(),
            Some("Failed to generate infographic. Please try again later. Server error: 503")
        );
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut state = GenerationState::new();
        state.show_error("Failed to copy to clipboard");
        state.begin();
        assert!(state.error().is_none());
    }

    #[test]
    fn test_error_replaces_prior_message() {
        let mut state = GenerationState::new();
        state.fail(&Error::EmptyUrl);
        state.fail(&Error::InvalidUrl("x".to_string()));
        assert_eq!(state.error(), Some("Please enter a valid YouTube video URL."));
    }

    #[test]
    fn test_start_validates_before_begin() {
        let mut state = GenerationState::new();
        state.begin();
        state.succeed(GenerationResult::new("<p>kept</p>"));
        state.finish();

        let err = state.start("vimeo.com/123").unwrap_err();

        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(!state.is_busy());
        assert_eq!(state.visible_markup(), Some("<p>kept</p>"));
        assert_eq!(state.error(), Some("Please enter a valid YouTube video URL."));
    }

    #[test]
    fn test_start_returns_trimmed_request() {
        let mut state = GenerationState::new();
        state.show_error("Please enter a valid YouTube URL.");

        let request = state.start("  youtu.be/abc123 ").unwrap().unwrap();

        assert_eq!(request.youtube_url, "youtu.be/abc123");
        assert!(state.is_busy());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_start_ignored_while_busy() {
        let mut state = GenerationState::new();
        assert!(state.start("youtu.be/one").unwrap().is_some());
        let before = state.clone();

        assert!(state.start("youtu.be/two").unwrap().is_none());
        assert!(state.start("vimeo.com/123").unwrap().is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_complete_always_leaves_busy() {
        let mut state = GenerationState::new();
        state.start("youtu.be/one").unwrap();
        state.complete(Ok(GenerationResult::new("<p>one</p>"))).unwrap();
        assert!(!state.is_busy());
        assert_eq!(state.visible_markup(), Some("<p>one</p>"));

        state.start("youtu.be/two").unwrap();
        let err = state.complete(Err(Error::EmptyResponse)).unwrap_err();
        assert!(matches!(err, Error::EmptyResponse));
        assert!(!state.is_busy());
        assert!(!state.is_result_visible());
        assert_eq!(
            state.error(),
            Some(
                "Failed to generate infographic. Please try again later. \
                 No HTML content received from the server."
            )
        );
        assert!(state.start("youtu.be/three").unwrap().is_some());
    }
}
