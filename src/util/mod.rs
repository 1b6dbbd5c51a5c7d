//! Small helpers shared by decoding, logging, and rendering.

use serde::{Deserialize, Deserializer};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Deserialize a year given either as a JSON integer or as an integer string.
///
/// Details:
/// - Surrounding whitespace in string form is ignored.
/// - Anything else (floats, words, out-of-range numbers) is a decode error.
pub fn de_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum YearRepr {
        Int(i64),
        Text(String),
    }
    let raw = match YearRepr::deserialize(deserializer)? {
        YearRepr::Int(v) => v,
        YearRepr::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid year: {s:?}")))?,
    };
    i32::try_from(raw).map_err(|_| serde::de::Error::custom(format!("year out of range: {raw}")))
}

/// Format a Unix timestamp (seconds) as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Returns an empty string for `None` and the raw number when out of range.
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    chrono::DateTime::from_timestamp(t, 0).map_or_else(
        || t.to_string(),
        |dt| dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

/// What: Cut `s` to at most `max` terminal columns, appending `…` when shortened.
///
/// Details:
/// - Width is measured in display columns, so wide CJK characters count as two.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
