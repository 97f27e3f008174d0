//! URL input and generate button.

use leptos::prelude::*;

use crate::state::use_generator;

/// Input area for the video URL.
///
/// The button is disabled while a request is in flight, and the whole group
/// shakes whenever an error is reported.
#[component]
pub fn UrlForm() -> impl IntoView {
    let ctx = use_generator();
    let (url, set_url) = signal(String::new());

    let on_generate = move |_| {
        ctx.generate(&url.get_untracked());
    };

    view! {
        <div class="input-group" class:shake=move || ctx.shaking.get()>
            <input
                id="youtube-url"
                type="url"
                class="url-input"
                placeholder="Paste a YouTube video URL..."
                autocomplete="off"
                prop:value=url
                on:input=move |ev| set_url.set(event_target_value(&ev))
            />
            <button
                id="generate-btn"
                class="btn btn-primary"
                disabled=move || ctx.is_busy()
                on:click=on_generate
            >
                {move || {
                    if ctx.is_busy() {
                        view! {
                            <span>"Generating..."</span>
                            <div class="spinner spinner-sm"></div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <span>"Generate Infographic"</span>
                            <i class="fa-solid fa-bolt"></i>
                        }
                            .into_any()
                    }
                }}
            </button>
        </div>
    }
}
