//! Rendered infographic with its export actions.

use infographic_core::GenerationState;
use leptos::html;
use leptos::prelude::*;

use crate::browser_api::scroll_into_view;
use crate::state::use_generator;

/// Result region. Hidden until a generation succeeds.
///
/// The markup from the webhook is injected as-is.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let ctx = use_generator();
    let section_ref = NodeRef::<html::Section>::new();

    let visible = move || ctx.state.with(GenerationState::is_result_visible);
    let markup = move || {
        ctx.state
            .with(|s| s.visible_markup().map(str::to_string))
            .unwrap_or_default()
    };

    // Bring each new result into view once it has been rendered
    Effect::new(move || {
        if ctx.result_seq.get() == 0 {
            return;
        }
        request_animation_frame(move || {
            if let Some(section) = section_ref.get_untracked() {
                scroll_into_view(&section);
            }
        });
    });

    view! {
        <section
            id="result-section"
            class="result-section"
            class:hidden=move || !visible()
            node_ref=section_ref
        >
            <div class="result-header">
                <h2>"Your Infographic"</h2>
                <div class="result-actions">
                    <button
                        id="download-btn"
                        class="btn btn-secondary"
                        on:click=move |_| ctx.download()
                    >
                        <i class="fa-solid fa-download"></i>
                        " Download HTML"
                    </button>
                    <button
                        id="copy-html-btn"
                        class="btn btn-secondary"
                        class:copied=move || ctx.copied.get()
                        on:click=move |_| ctx.copy()
                    >
                        {move || {
                            if ctx.copied.get() {
                                view! {
                                    <i class="fa-solid fa-check"></i>
                                    " Copied!"
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <i class="fa-solid fa-copy"></i>
                                    " Copy HTML"
                                }
                                    .into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
            <div id="result-content" class="result-content" inner_html=markup></div>
        </section>
    }
}
