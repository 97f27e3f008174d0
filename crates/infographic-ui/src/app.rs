//! Main application component.

use infographic_core::ClientConfig;
use leptos::prelude::*;

use crate::components::{ErrorMessage, Header, LoadingIndicator, ResultPanel, UrlForm};
use crate::state::GeneratorProvider;
use crate::theme::generate_css_variables;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let css_vars = generate_css_variables();
    let config = ClientConfig::from_build_env();
    leptos::logging::log!("Webhook endpoint: {}", config.webhook_url);

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        <Header />
        <main class="container">
            <GeneratorProvider config=config>
                <section class="hero">
                    <h1>"Turn any YouTube video into an infographic"</h1>
                    <p class="subtitle">
                        "Paste a link, and we'll summarize the video into a visual you can download or share."
                    </p>
                </section>
                <div class="card generator-card">
                    <UrlForm />
                    <ErrorMessage />
                </div>
                <LoadingIndicator />
                <ResultPanel />
            </GeneratorProvider>
        </main>
    }
}
