//! Theme preference resolution and persistence.

use crate::config::theme::STORAGE_KEY;
use crate::core::error::StorageError;
use crate::models::Theme;

/// Key-value storage holding the theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Resolves the initial theme.
///
/// Precedence: stored preference, then the OS dark-scheme preference, then
/// light. A stored value that is not a theme literal counts as absent.
pub fn resolve_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(|s| s.parse::<Theme>().ok()) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Reads and writes the persisted theme preference.
pub struct ThemeManager<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Theme to apply on page load.
    pub fn initial(&self, prefers_dark: bool) -> Theme {
        resolve_theme(self.store.load(STORAGE_KEY).as_deref(), prefers_dark)
    }

    /// Flips `current` and persists the result.
    ///
    /// The flipped theme is returned even when persisting fails so the page
    /// still switches.
    pub fn toggle(&self, current: Theme) -> (Theme, Result<(), StorageError>) {
        let next = current.toggled();
        (next, self.store.save(STORAGE_KEY, next.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self::default()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed)
        }
    }

    #[test]
    fn test_precedence() {
        assert_eq!(resolve_theme(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve_theme(Some("light"), true), Theme::Light);
        assert_eq!(resolve_theme(None, true), Theme::Dark);
        assert_eq!(resolve_theme(None, false), Theme::Light);
        assert_eq!(resolve_theme(Some("sepia"), true), Theme::Dark);
        assert_eq!(resolve_theme(Some(""), false), Theme::Light);
    }

    #[test]
    fn test_persisted_choice_survives_reload() {
        let manager = ThemeManager::new(MemoryStore::new());
        let start = manager.initial(false);
        assert_eq!(start, Theme::Light);

        let (next, saved) = manager.toggle(start);
        assert_eq!(next, Theme::Dark);
        assert!(saved.is_ok());

        // Reload with a light OS preference: stored value wins.
        let reloaded = ThemeManager::new(manager.store);
        assert_eq!(reloaded.initial(false), Theme::Dark);
    }

    #[test]
    fn test_stored_light_beats_dark_os() {
        let store = MemoryStore::new();
        store.save(STORAGE_KEY, "light").unwrap();
        let manager = ThemeManager::new(store);
        assert_eq!(manager.initial(true), Theme::Light);
    }

    #[test]
    fn test_failed_save_still_toggles() {
        let manager = ThemeManager::new(ReadOnlyStore);
        let (next, saved) = manager.toggle(Theme::Dark);
        assert_eq!(next, Theme::Light);
        assert_eq!(saved, Err(StorageError::WriteFailed));
    }
}
