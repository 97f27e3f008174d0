//! Error region shared by every failure path.

use leptos::prelude::*;

use crate::state::use_generator;

/// Single-line error message, hidden while there is nothing to report.
#[component]
pub fn ErrorMessage() -> impl IntoView {
    let ctx = use_generator();
    let message = move || ctx.state.with(|s| s.error().map(str::to_string));

    view! {
        <p
            id="error-message"
            class="error-message"
            class:hidden=move || message().is_none()
            role="alert"
            aria-live="polite"
        >
            {message}
        </p>
    }
}
