//! Browser API bindings for WASM.
//!
//! Thin wrappers over `fetch`, `localStorage`, the clipboard, Blob downloads
//! and scrolling. None of these panic when an API is missing; they log and
//! return an error instead.

use gloo_net::http::Request;
use infographic_core::{
    DOWNLOAD_MIME_TYPE, Error, PreferenceStore, Result, Theme, TransportResponse,
    WebhookTransport,
};
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, HtmlAnchorElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Url,
};

/// Best-effort message for a thrown JavaScript value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "Unknown browser error".to_string())
}

/// Message for a failed request, without the JS error name prefix.
fn fetch_error_message(error: gloo_net::Error) -> String {
    match error {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

// =============================================================================
// Network
// =============================================================================

/// [`WebhookTransport`] backed by the browser's `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl WebhookTransport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse> {
        leptos::logging::log!("=== POST {} START ===", url);

        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| Error::Transport(fetch_error_message(e)))?
            .send()
            .await
            .map_err(|e| {
                leptos::logging::error!("=== POST {} FAILED: {} ===", url, e);
                Error::Transport(fetch_error_message(e))
            })?;

        let status = response.status();
        leptos::logging::log!("=== POST {} GOT STATUS {} ===", url, status);

        // The body of a failed response is never shown
        let body = if response.ok() {
            response
                .text()
                .await
                .map_err(|e| Error::Transport(fetch_error_message(e)))?
        } else {
            String::new()
        };

        Ok(TransportResponse { status, body })
    }
}

// =============================================================================
// Preferences
// =============================================================================

/// [`PreferenceStore`] over `window.localStorage`.
///
/// Storage is looked up on every call, so a blocked or missing store simply
/// reads as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = local_storage()
            .ok_or_else(|| Error::Storage("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(js_error_message(&e)))
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                leptos::logging::error!("Failed to apply theme: {}", js_error_message(&e));
            }
        }
        None => leptos::logging::error!("No document element to apply theme to"),
    }
}

// =============================================================================
// Clipboard
// =============================================================================

/// Write `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<()> {
    let window =
        web_sys::window().ok_or_else(|| Error::Clipboard("window is not available".to_string()))?;

    // Looked up dynamically: `navigator.clipboard` is undefined on insecure origins
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .ok()
        .filter(|c| !c.is_undefined() && !c.is_null())
        .ok_or_else(|| Error::Clipboard("Clipboard API is not available".to_string()))?
        .unchecked_into::<web_sys::Clipboard>();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| Error::Clipboard(js_error_message(&e)))
}

// =============================================================================
// Download
// =============================================================================

/// Offer `contents` to the user as an HTML file named `filename`.
pub fn download_html(filename: &str, contents: &str) -> Result<()> {
    let export_err = |e: JsValue| Error::Export(js_error_message(&e));

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Export("document is not available".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| Error::Export("document has no body".to_string()))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(DOWNLOAD_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(export_err)?;
    let href = Url::create_object_url_with_blob(&blob).map_err(export_err)?;

    let link = document
        .create_element("a")
        .map_err(export_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| Error::Export("created element is not an anchor".to_string()))?;
    link.set_href(&href);
    link.set_download(filename);

    body.append_child(&link).map_err(export_err)?;
    link.click();
    body.remove_child(&link).map_err(export_err)?;

    // Revoke on the next tick so the click has been dispatched
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        if let Err(e) = Url::revoke_object_url(&href) {
            leptos::logging::error!("Failed to revoke object URL: {}", js_error_message(&e));
        }
    });

    Ok(())
}

// =============================================================================
// Layout
// =============================================================================

/// Smoothly scroll `element` to the top of the viewport.
pub fn scroll_into_view(element: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
