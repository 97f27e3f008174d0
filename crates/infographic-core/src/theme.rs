//! Theme preference and its two-state switcher.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

/// Storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Display theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (default).
    #[default]
    Dark,
    /// Light theme.
    Light,
}

impl Theme {
    /// Value stored and written to the `data-theme` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon shown on the toggle: a sun while dark, a moon while light.
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fa-solid fa-sun",
            Self::Light => "fa-solid fa-moon",
        }
    }

    /// Parse a stored value. Anything other than `dark` or `light` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Resolve a possibly missing or corrupt stored value, defaulting to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synchronous key-value store for preferences.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Read a value. Unreadable storage behaves like a missing key.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Nothing survives the process; tests and native hosts use it.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Two-state theme machine backed by a [`PreferenceStore`].
#[derive(Debug)]
pub struct ThemeSwitcher<S> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeSwitcher<S> {
    /// Read the persisted preference once.
    pub fn load(store: S) -> Self {
        let stored = store.get(THEME_STORAGE_KEY);
        let theme = Theme::from_stored(stored.as_deref());
        debug!("Loaded theme preference {:?} -> {}", stored, theme);
        Self { store, theme }
    }

    /// Current theme.
    pub const fn current(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it. Returns the new theme.
    ///
    /// A failed write is logged; the in-memory state still flips.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, self.theme.as_str()) {
            warn!("Failed to persist theme preference: {}", e);
        }
        self.theme
    }

    /// The backing store.
    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_theme_strings_and_icons() {
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.as_str(), "light");
        assert_eq!(Theme::Dark.icon_class(), "fa-solid fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fa-solid fa-moon");
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_from_stored_defaults_to_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).ok().as_deref(), Some("\"light\""));
    }

    #[test]
    fn test_load_reads_preference_once() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .with(eq(THEME_STORAGE_KEY))
            .times(1)
            .returning(|_| Some("light".to_string()));

        let switcher = ThemeSwitcher::load(store);
        assert_eq!(switcher.current(), Theme::Light);
        assert_eq!(switcher.current(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_new_value() {
        let mut store = MockPreferenceStore::new();
        store.expect_get().returning(|_| None);
        store
            .expect_set()
            .with(eq(THEME_STORAGE_KEY), eq("light"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut switcher = ThemeSwitcher::load(store);
        assert_eq!(switcher.toggle(), Theme::Light);
    }

    #[test]
    fn test_toggle_survives_storage_failure() {
        let mut store = MockPreferenceStore::new();
        store.expect_get().returning(|_| None);
        store
            .expect_set()
            .returning(|_, _| Err(Error::Storage("QuotaExceededError".to_string())));

        let mut switcher = ThemeSwitcher::load(store);
        assert_eq!(switcher.toggle(), Theme::Light);
        assert_eq!(switcher.current(), Theme::Light);
    }

    #[test]
    fn test_double_toggle_restores_original() {
        let store = MemoryPreferenceStore::new();
        store.set(THEME_STORAGE_KEY, "light").ok();

        let mut switcher = ThemeSwitcher::load(store);
        let original_icon = switcher.current().icon_class();

        switcher.toggle();
        assert_eq!(switcher.store().get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        switcher.toggle();

        assert_eq!(switcher.current(), Theme::Light);
        assert_eq!(switcher.current().icon_class(), original_icon);
        assert_eq!(switcher.store().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }
}
