//! Infographic generator UI - Leptos-based browser widget.
//!
//! This crate provides the frontend components: URL input, result display,
//! export actions and the theme toggle. Core logic lives in
//! `infographic-core`.

// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod browser_api;
pub mod components;
pub mod state;
pub mod theme;

pub use app::App;
