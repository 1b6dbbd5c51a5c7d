//! Line-level parsing shared by `settings.conf` and the preference file.

/// What: Remove inline comments from a configuration value.
///
/// Inputs:
/// - `s`: Raw value text that may include `#` or `//` comments.
///
/// Output:
/// - Comment-free and trimmed substring of the input.
///
/// Details:
/// - `//` is only a comment when not part of a URL scheme (`://`), so
///   `catalog_source = https://host/books.json` survives intact.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    let mut search_from = 0;
    while let Some(rel) = s[search_from..].find("//") {
        let i = search_from + rel;
        if i > 0 && s.as_bytes()[i - 1] == b':' {
            search_from = i + 2;
            continue;
        }
        s = &s[..i];
        break;
    }
    if let Some(i) = s.find(" #") {
        s = &s[..i];
    }
    s.trim()
}

/// Normalize a config key: lowercase, with `.`, `-` and spaces mapped to `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Split a config line into a normalized key and a cleaned value.
///
/// Output:
/// - `None` for blank lines, comment lines, and lines without `=`.
pub(crate) fn split_key_value(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (k, v) = trimmed.split_once('=')?;
    Some((normalize_key(k), strip_inline_comment(v.trim())))
}

/// What: Set `key = value` in config text, keeping every other line.
///
/// Inputs:
/// - `content`: Existing file content (may be empty)
/// - `key`: Normalized key to set
/// - `value`: New value
///
/// Output:
/// - New content with the first matching line replaced, or the pair appended.
pub(crate) fn upsert_key(content: &str, key: &str, value: &str) -> String {
    let mut lines: Vec<String> = content.lines().map(ToString::to_string).collect();
    let mut replaced = false;
    for line in &mut lines {
        if let Some((k, _)) = split_key_value(line)
            && k == key
        {
            *line = format!("{key} = {value}");
            replaced = true;
            break;
        }
    }
    if !replaced {
        lines.push(format!("{key} = {value}"));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
