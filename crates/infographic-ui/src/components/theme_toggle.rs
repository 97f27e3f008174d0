//! Dark/light theme toggle.

use infographic_core::ThemeSwitcher;
use leptos::prelude::*;

use crate::browser_api::{LocalStorageStore, apply_theme};

/// Button that flips the theme and persists the choice.
///
/// Reads the stored preference once when created and applies it to the page.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let switcher = StoredValue::new(ThemeSwitcher::load(LocalStorageStore));
    let (theme, set_theme) = signal(switcher.with_value(ThemeSwitcher::current));
    apply_theme(theme.get_untracked());

    let on_toggle = move |_| {
        switcher.update_value(|s| {
            s.toggle();
        });
        let next = switcher.with_value(ThemeSwitcher::current);
        apply_theme(next);
        set_theme.set(next);
    };

    view! {
        <button
            id="theme-toggle"
            class="btn btn-ghost btn-icon theme-toggle"
            on:click=on_toggle
            aria-label="Toggle theme"
            data-theme-state=move || theme.get().as_str()
        >
            <i class=move || theme.get().icon_class()></i>
        </button>
    }
}
