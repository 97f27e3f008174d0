//! UI components for the infographic generator.

mod error_message;
mod header;
mod loading;
mod result_panel;
mod theme_toggle;
mod url_form;

pub use error_message::ErrorMessage;
pub use header::Header;
pub use loading::LoadingIndicator;
pub use result_panel::ResultPanel;
pub use theme_toggle::ThemeToggle;
pub use url_form::UrlForm;
