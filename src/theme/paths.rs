use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the config base.
const APP_DIR: &str = "bookcase";

/// What: Resolve the config base from explicit environment values.
///
/// Inputs:
/// - `xdg_config`: Value of `XDG_CONFIG_HOME`, if set
/// - `home`: Value of `HOME`, if set
///
/// Output:
/// - `$XDG_CONFIG_HOME/bookcase` when non-empty, else `$HOME/.config/bookcase`,
///   else `./.config/bookcase`.
fn config_dir_from(xdg_config: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(x) = xdg_config
        && !x.trim().is_empty()
    {
        return Path::new(x).join(APP_DIR);
    }
    let home = home.filter(|h| !h.trim().is_empty()).unwrap_or(".");
    Path::new(home).join(".config").join(APP_DIR)
}

/// Config directory for bookcase (ensured to exist on a best-effort basis).
pub fn config_dir() -> PathBuf {
    let dir = config_dir_from(
        env::var("XDG_CONFIG_HOME").ok().as_deref(),
        env::var("HOME").ok().as_deref(),
    );
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::debug!(path = %dir.display(), error = %e, "could not create config dir");
    }
    dir
}

/// Logs directory under config: `<config>/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of `settings.conf`.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// Default path of the theme preference file.
pub fn prefs_path() -> PathBuf {
    config_dir().join("prefs.conf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: XDG wins over HOME; blanks fall through
    ///
    /// - Input: Combinations of XDG/HOME values
    /// - Output: Expected base directories
    fn config_dir_resolution_order() {
        assert_eq!(
            config_dir_from(Some("/x"), Some("/h")),
            PathBuf::from("/x/bookcase")
        );
        assert_eq!(
            config_dir_from(Some("  "), Some("/h")),
            PathBuf::from("/h/.config/bookcase")
        );
        assert_eq!(
            config_dir_from(None, Some("/h")),
            PathBuf::from("/h/.config/bookcase")
        );
        assert_eq!(config_dir_from(None, None), PathBuf::from("./.config/bookcase"));
    }
}
