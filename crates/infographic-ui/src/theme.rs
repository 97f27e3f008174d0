//! Theme configuration for the infographic generator.
//!
//! Two palettes keyed by the `data-theme` attribute on `<html>`. Dark is the
//! default and also applies before the attribute is set.

use infographic_core::{DEFAULT_SHAKE_DURATION_MS, Theme};

/// Colors that differ between the dark and light themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background.
    pub bg_primary: &'static str,
    /// Card/panel background.
    pub bg_secondary: &'static str,
    /// Input background.
    pub bg_input: &'static str,
    /// Primary text.
    pub text_primary: &'static str,
    /// Muted text.
    pub text_secondary: &'static str,
    /// Default border.
    pub border: &'static str,
    /// Brand accent.
    pub accent: &'static str,
    /// Accent on hover.
    pub accent_hover: &'static str,
    /// Error text and shake border.
    pub error: &'static str,
    /// Success acknowledgment.
    pub success: &'static str,
    /// Soft card shadow.
    pub shadow: &'static str,
}

/// Dark palette.
pub const DARK: Palette = Palette {
    bg_primary: "#0f0f13",
    bg_secondary: "#1a1a22",
    bg_input: "#24242e",
    text_primary: "#f5f5f7",
    text_secondary: "#a1a1aa",
    border: "rgba(255, 255, 255, 0.08)",
    accent: "#a78bfa",
    accent_hover: "#8b5cf6",
    error: "#f87171",
    success: "#34d399",
    shadow: "0 8px 32px rgba(0, 0, 0, 0.4)",
};

/// Light palette.
pub const LIGHT: Palette = Palette {
    bg_primary: "#f7f7fb",
    bg_secondary: "#ffffff",
    bg_input: "#f0f0f5",
    text_primary: "#18181b",
    text_secondary: "#52525b",
    border: "rgba(0, 0, 0, 0.08)",
    accent: "#7c3aed",
    accent_hover: "#6d28d9",
    error: "#dc2626",
    success: "#059669",
    shadow: "0 4px 16px rgba(0, 0, 0, 0.08)",
};

/// Palette for `theme`.
pub const fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => DARK,
        Theme::Light => LIGHT,
    }
}

/// Typography configuration.
pub mod typography {
    /// Body font stack.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
}

/// Border radius values.
pub mod radius {
    /// Inputs and buttons.
    pub const MD: &str = "0.625rem";
    /// Cards.
    pub const LG: &str = "1rem";
}

/// Animation/transition configuration.
pub mod animation {
    /// Transition for interactive elements.
    pub const FAST: &str = "0.15s cubic-bezier(0.4, 0, 0.2, 1)";
    /// Transition for theme changes.
    pub const NORMAL: &str = "0.2s cubic-bezier(0.4, 0, 0.2, 1)";
}

fn palette_block(selector: &str, p: &Palette) -> String {
    format!(
        r"{selector} {{
  --bg-primary: {bg_primary};
  --bg-secondary: {bg_secondary};
  --bg-input: {bg_input};
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --border-color: {border};
  --accent-color: {accent};
  --accent-hover: {accent_hover};
  --error-color: {error};
  --success-color: {success};
  --shadow-soft: {shadow};
}}",
        bg_primary = p.bg_primary,
        bg_secondary = p.bg_secondary,
        bg_input = p.bg_input,
        text_primary = p.text_primary,
        text_secondary = p.text_secondary,
        border = p.border,
        accent = p.accent,
        accent_hover = p.accent_hover,
        error = p.error,
        success = p.success,
        shadow = p.shadow,
    )
}

/// Generate CSS custom properties for both themes.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  --font-family: {font_family};
  --radius-md: {radius_md};
  --radius-lg: {radius_lg};
  --transition-fast: {transition_fast};
  --transition-normal: {transition_normal};
  --shake-duration: {shake_ms}ms;
}}
{dark_root}
{dark}
{light}",
        font_family = typography::FONT_FAMILY,
        radius_md = radius::MD,
        radius_lg = radius::LG,
        transition_fast = animation::FAST,
        transition_normal = animation::NORMAL,
        shake_ms = DEFAULT_SHAKE_DURATION_MS,
        dark_root = palette_block(":root", &palette(Theme::default())),
        dark = palette_block(r#"[data-theme="dark"]"#, &palette(Theme::Dark)),
        light = palette_block(r#"[data-theme="light"]"#, &palette(Theme::Light)),
    )
}
