//! Header component.

use leptos::prelude::*;

use super::ThemeToggle;

/// Application header component.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="logo">
                <i class="fa-solid fa-chart-pie"></i>
                <span class="logo-text">"AI Infographic Generator"</span>
            </div>
            <ThemeToggle />
        </header>
    }
}
