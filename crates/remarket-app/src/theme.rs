//! Theme preference.
//!
//! Persistence goes through a small key-value trait so the host can plug in
//! browser local storage, a config file, or an in-memory map for tests.

use serde::{Deserialize, Serialize};

/// Storage key for the persisted theme.
pub const THEME_KEY: &str = "remarket-theme";

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_str(s: &str) -> Option<Theme> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Pluggable persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used in tests and as a harmless default.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Owns the current theme and keeps the store in sync.
pub struct ThemeManager {
    store: Box<dyn PreferenceStore>,
    current: Theme,
}

impl ThemeManager {
    /// Resolve the initial theme: a valid stored value wins, then the
    /// system preference hint, then dark.
    pub fn new(store: Box<dyn PreferenceStore>, system_prefers_light: Option<bool>) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|s| Theme::from_str(&s))
            .unwrap_or(match system_prefers_light {
                Some(true) => Theme::Light,
                _ => Theme::Dark,
            });
        Self { store, current }
    }

    /// The active theme.
    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn is_dark(&self) -> bool {
        self.current == Theme::Dark
    }

    /// Set and persist the theme.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.store.set(THEME_KEY, theme.as_str());
    }

    /// Flip between dark and light.
    pub fn toggle(&mut self) {
        self.set(self.current.toggled());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_dark() {
        let manager = ThemeManager::new(Box::new(MemoryStore::default()), None);
        assert!(manager.is_dark());
    }

    #[test]
    fn test_system_hint_used_without_stored_value() {
        let manager = ThemeManager::new(Box::new(MemoryStore::default()), Some(true));
        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn test_stored_value_wins_over_system_hint() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "dark");
        let manager = ThemeManager::new(Box::new(store), Some(true));
        assert_eq!(manager.current(), Theme::Dark);
    }

    #[test]
    fn test_invalid_stored_value_falls_through() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "solarized");
        let manager = ThemeManager::new(Box::new(store), None);
        assert_eq!(manager.current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let mut manager = ThemeManager::new(Box::new(MemoryStore::default()), None);
        manager.toggle();
        assert_eq!(manager.current(), Theme::Light);
        assert_eq!(manager.store.get(THEME_KEY).as_deref(), Some("light"));
        manager.toggle();
        assert!(manager.is_dark());
    }
}
