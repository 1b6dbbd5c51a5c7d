use std::fs;
use std::path::{Path, PathBuf};

use super::parsing::{split_key_value, upsert_key};
use super::types::ThemeMode;

/// Key under which the theme preference is stored.
const THEME_KEY: &str = "theme";

/// Persisted `light`/`dark` preference.
///
/// Read once at startup and written on every toggle. The file uses the same
/// `key = value` format as `settings.conf`; lines other than `theme` are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store backed by the file at `path` (created on first save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under the config directory.
    pub fn default_location() -> Self {
        Self::new(super::paths::prefs_path())
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// What: Read the stored theme.
    ///
    /// Output:
    /// - The stored mode, or `ThemeMode::Dark` when the file, key, or value is missing or invalid.
    pub fn load(&self) -> ThemeMode {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return ThemeMode::default();
        };
        content
            .lines()
            .filter_map(split_key_value)
            .find(|(k, _)| k == THEME_KEY)
            .and_then(|(_, v)| ThemeMode::parse(v))
            .unwrap_or_default()
    }

    /// What: Persist `mode`.
    ///
    /// Details:
    /// - Creates the parent directory if needed.
    /// - IO failures are logged, not returned; the in-memory mode stays authoritative
    ///   for the session.
    pub fn save(&self, mode: ThemeMode) {
        let existing = fs::read_to_string(&self.path).unwrap_or_default();
        let content = upsert_key(&existing, THEME_KEY, mode.as_str());
        if let Some(dir) = self.path.parent()
            && let Err(e) = fs::create_dir_all(dir)
        {
            tracing::warn!(path = %self.path.display(), error = %e, "could not create preference dir");
            return;
        }
        match fs::write(&self.path, content) {
            Ok(()) => tracing::debug!(path = %self.path.display(), theme = mode.as_str(), "saved theme"),
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "could not save theme"),
        }
    }

    /// Flip `current`, persist the result, and return it.
    pub fn toggle(&self, current: ThemeMode) -> ThemeMode {
        let next = current.toggled();
        self.save(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Missing file means dark; one toggle persists light across restarts
    ///
    /// - Input: Fresh temp dir; load, toggle, then a new store on the same path
    /// - Output: Dark, then light from the new store
    fn default_dark_then_toggle_persists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.conf");
        let store = PreferenceStore::new(&path);
        let current = store.load();
        assert_eq!(current, ThemeMode::Dark);
        assert_eq!(store.toggle(current), ThemeMode::Light);

        let restarted = PreferenceStore::new(&path);
        assert_eq!(restarted.load(), ThemeMode::Light);
        assert_eq!(fs::read_to_string(&path).expect("written"), "theme = light\n");
    }

    #[test]
    /// What: Invalid values fall back to dark
    fn invalid_value_is_dark() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.conf");
        fs::write(&path, "theme = sepia\n").expect("write");
        assert_eq!(PreferenceStore::new(&path).load(), ThemeMode::Dark);
    }

    #[test]
    /// What: Saving keeps comments and unrelated keys
    fn save_preserves_other_lines() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.conf");
        fs::write(&path, "# mine\nTheme = light\nextra = 1\n").expect("write");
        let store = PreferenceStore::new(&path);
        assert_eq!(store.load(), ThemeMode::Light);
        store.save(ThemeMode::Dark);
        assert_eq!(
            fs::read_to_string(&path).expect("read"),
            "# mine\ntheme = dark\nextra = 1\n"
        );
    }

    #[test]
    /// What: Saving into a missing nested directory creates it
    fn save_creates_parent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("a").join("b").join("prefs.conf");
        PreferenceStore::new(&path).save(ThemeMode::Light);
        assert_eq!(PreferenceStore::new(&path).load(), ThemeMode::Light);
    }
}
