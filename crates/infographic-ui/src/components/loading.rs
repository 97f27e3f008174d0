//! Loading indicator shown while the webhook is working.

use leptos::prelude::*;

use crate::state::use_generator;

/// Spinner with a status line, visible only while a request is in flight.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let ctx = use_generator();

    view! {
        <div
            id="generation-loading"
            class="loading-section"
            class:hidden=move || !ctx.is_busy()
            aria-busy=move || ctx.is_busy().to_string()
        >
            <div class="spinner"></div>
            <p class="loading-text">"Analyzing video and generating your infographic..."</p>
        </div>
    }
}
