use std::fs;
use std::path::Path;

use crate::state::SortMode;
use crate::theme::parsing::split_key_value;
use crate::theme::types::Settings;

/// Content written to a fresh `settings.conf`.
pub(crate) const SETTINGS_SKELETON_CONTENT: &str = "\
# bookcase settings
#
# Catalog document: a local path or an http(s) URL holding a JSON array of books.
catalog_source = books.json

# Initial ordering of results: relevance | author | category
sort_mode = relevance
";

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content
///
/// Output:
/// - Settings with recognized keys applied over the defaults.
///
/// Details:
/// - Unknown keys and unparsable values are ignored with a debug log.
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::default();
    for line in content.lines() {
        let Some((key, val)) = split_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "sort_mode" | "results_sort" | "ordenar_por" => {
                if let Some(sm) = SortMode::from_config_key(val) {
                    settings.sort_mode = sm;
                } else {
                    tracing::debug!(value = val, "ignoring unknown sort_mode");
                }
            }
            "catalog_source" | "catalog" | "data_source" => {
                if !val.is_empty() {
                    settings.catalog_source = val.to_string();
                }
            }
            other => tracing::debug!(key = other, "ignoring unknown settings key"),
        }
    }
    settings
}

/// What: Load settings from `path`, writing the skeleton when the file is missing.
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
pub fn load_settings(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if let Some(dir) = path.parent() {
                let _ = fs::create_dir_all(dir);
            }
            if let Err(e) = fs::write(path, SETTINGS_SKELETON_CONTENT) {
                tracing::warn!(path = %path.display(), error = %e, "could not write settings skeleton");
            } else {
                tracing::info!(path = %path.display(), "wrote default settings skeleton");
            }
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read settings; using defaults");
            Settings::default()
        }
    }
}

/// Load settings from the default location under the config directory.
pub fn settings() -> Settings {
    load_settings(&crate::theme::paths::settings_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Recognized keys override defaults; junk is ignored
    fn parse_known_and_unknown_keys() {
        let s = parse_settings(
            "# c\nsort_mode = category\ncatalog_source = https://x.org/b.json # remote\nfoo = bar\n",
        );
        assert_eq!(s.sort_mode, SortMode::Category);
        assert_eq!(s.catalog_source, "https://x.org/b.json");

        let s = parse_settings("sort_mode = sideways\ncatalog_source =\n");
        assert_eq!(s, Settings::default());
    }

    #[test]
    /// What: The skeleton parses to the defaults
    fn skeleton_matches_defaults() {
        assert_eq!(parse_settings(SETTINGS_SKELETON_CONTENT), Settings::default());
    }

    #[test]
    /// What: A missing file yields defaults and leaves a skeleton behind
    fn load_missing_writes_skeleton() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.conf");
        assert_eq!(load_settings(&path), Settings::default());
        let written = fs::read_to_string(&path).expect("skeleton written");
        assert_eq!(written, SETTINGS_SKELETON_CONTENT);
    }
}
