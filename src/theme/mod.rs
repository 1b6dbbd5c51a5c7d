//! Theme system: palettes, config paths, settings, and the persisted
//! light/dark preference.

/// Built-in dark and light palettes.
mod palette;
/// Config line parsing.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// `settings.conf` loading.
mod settings;
/// Theme preference persistence.
mod store;
/// Theme type definitions.
mod types;

pub use palette::theme;
pub use paths::{config_dir, logs_dir, prefs_path, settings_path};
pub use settings::{load_settings, parse_settings, settings};
pub use store::PreferenceStore;
pub use types::{Settings, Theme, ThemeMode};
