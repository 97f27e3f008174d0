//! Shared generator state for the component tree.
//!
//! [`GeneratorContext`] owns the panel state, the shake cue and the copy
//! acknowledgment. It is also the single error sink: validation, generation
//! and clipboard failures all go through [`GeneratorContext::report`].

use infographic_core::{
    ClientConfig, Error, GenerationClient, GenerationState, standalone_document,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser_api::{self, FetchTransport};

/// Context shared by the generator components.
#[derive(Clone, Copy)]
pub struct GeneratorContext {
    /// Panel state: busy flag, last result, error message.
    pub state: RwSignal<GenerationState>,
    /// Whether the input area currently shakes.
    pub shaking: ReadSignal<bool>,
    set_shaking: WriteSignal<bool>,
    shake_seq: StoredValue<u64>,
    /// Whether the copy button shows its acknowledgment.
    pub copied: ReadSignal<bool>,
    set_copied: WriteSignal<bool>,
    copy_seq: StoredValue<u64>,
    /// Bumped on every successful generation; the result panel scrolls on change.
    pub result_seq: ReadSignal<u64>,
    set_result_seq: WriteSignal<u64>,
    client: StoredValue<GenerationClient<FetchTransport>>,
}

impl GeneratorContext {
    /// Create a context talking to the configured webhook.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        let (shaking, set_shaking) = signal(false);
        let (copied, set_copied) = signal(false);
        let (result_seq, set_result_seq) = signal(0u64);
        Self {
            state: RwSignal::new(GenerationState::new()),
            shaking,
            set_shaking,
            shake_seq: StoredValue::new(0),
            copied,
            set_copied,
            copy_seq: StoredValue::new(0),
            result_seq,
            set_result_seq,
            client: StoredValue::new(GenerationClient::new(config, FetchTransport)),
        }
    }

    /// Whether a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.state.with(GenerationState::is_busy)
    }

    /// Show `error` in the error region and shake the input.
    pub fn report(&self, error: &Error) {
        self.state.update(|s| s.fail(error));
        self.alert(error);
    }

    /// Log and shake for an error the panel state already shows.
    fn alert(&self, error: &Error) {
        leptos::logging::error!("{:?}: {}", error.kind(), error);
        self.shake();
    }

    fn shake(&self) {
        let seq = next_seq(self.shake_seq);
        let set_shaking = self.set_shaking;
        let shake_seq = self.shake_seq;
        let duration = self.client.with_value(|c| c.config().shake_duration_ms);

        set_shaking.set(true);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration).await;
            // A newer error restarted the cue
            if shake_seq.get_value() == seq {
                set_shaking.set(false);
            }
        });
    }

    /// Validate `input` and, if it passes, request an infographic.
    ///
    /// Invalid input is reported without touching the current result.
    /// Submits while a request is in flight are ignored.
    pub fn generate(&self, input: &str) {
        let mut started = Ok(None);
        self.state.update(|s| started = s.start(input));
        let request = match started {
            Ok(Some(request)) => request,
            Ok(None) => return,
            Err(e) => {
                self.alert(&e);
                return;
            }
        };

        let ctx = *self;
        let client = self.client.get_value();
        spawn_local(async move {
            let outcome = client.send(&request).await;
            let mut completed = Ok(());
            ctx.state.update(|s| completed = s.complete(outcome));
            match completed {
                Ok(()) => {
                    leptos::logging::log!("Rendered infographic for {}", request.youtube_url);
                    ctx.set_result_seq.update(|n| *n += 1);
                }
                Err(e) => ctx.alert(&e),
            }
        });
    }

    /// Download the last result as a standalone HTML file.
    pub fn download(&self) {
        let Some(markup) = self
            .state
            .with_untracked(|s| s.result().map(|r| r.markup().to_string()))
        else {
            return;
        };
        let filename = self.client.with_value(|c| c.config().download_filename.clone());
        if let Err(e) = browser_api::download_html(&filename, &standalone_document(&markup)) {
            self.report(&e);
        }
    }

    /// Copy the raw markup of the last result to the clipboard.
    pub fn copy(&self) {
        let Some(markup) = self
            .state
            .with_untracked(|s| s.result().map(|r| r.markup().to_string()))
        else {
            return;
        };

        let ctx = *self;
        spawn_local(async move {
            match browser_api::copy_to_clipboard(&markup).await {
                Ok(()) => ctx.acknowledge_copy(),
                Err(e) => ctx.report(&e),
            }
        });
    }

    fn acknowledge_copy(&self) {
        let seq = next_seq(self.copy_seq);
        let set_copied = self.set_copied;
        let copy_seq = self.copy_seq;
        let duration = self.client.with_value(|c| c.config().copy_feedback_ms);

        set_copied.set(true);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration).await;
            if copy_seq.get_value() == seq {
                set_copied.set(false);
            }
        });
    }
}

fn next_seq(seq: StoredValue<u64>) -> u64 {
    seq.update_value(|s| *s += 1);
    seq.get_value()
}

/// Provide a [`GeneratorContext`] to `children`.
#[component]
pub fn GeneratorProvider(
    /// Client configuration.
    config: ClientConfig,
    /// Child components that can access the generator context.
    children: Children,
) -> impl IntoView {
    provide_context(GeneratorContext::new(config));
    children()
}

/// Hook to access the generator context.
///
/// # Panics
/// Panics if called outside of a `GeneratorProvider`.
pub fn use_generator() -> GeneratorContext {
    expect_context::<GeneratorContext>()
}
