//! Locale-aware string ordering for author names and category labels.
//!
//! Comparison is multi-level in the manner of the root collation:
//! 1. base letters, case-folded, with accents removed and letters such as
//!    `ø`, `ł` or `æ` folded to their base spelling
//! 2. accents and folded letters, plain before marked, compared left to right
//! 3. case, lowercase before uppercase
//! 4. raw codepoints, so distinct strings never compare equal
//!
//! The result is a total order where `"Émile"` sorts between `"Elena"` and
//! `"Eric"` rather than after `"Zoe"` as a codepoint comparison would place it.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Level-2 weight of a folded letter; above every real combining mark.
const FOLDED_MARK: u32 = 0x11_0000;

/// Base spelling of letters that have no canonical decomposition.
fn fold(c: char) -> Option<&'static str> {
    Some(match c {
        'ø' | 'Ø' | 'ǿ' | 'Ǿ' => "o",
        'ł' | 'Ł' => "l",
        'đ' | 'Đ' | 'ð' | 'Ð' => "d",
        'ħ' | 'Ħ' => "h",
        'ŧ' | 'Ŧ' => "t",
        'ı' => "i",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'ß' | 'ẞ' => "ss",
        'þ' | 'Þ' => "th",
        _ => return None,
    })
}

/// Precomputed sort key for one string.
///
/// Field order is comparison order; the derived `Ord` relies on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    /// Case-folded base letters without combining marks.
    primary: String,
    /// Combining marks per base letter, each run terminated by `0`. Folded
    /// letters open their run with [`FOLDED_MARK`].
    secondary: Vec<u32>,
    /// `0` for non-uppercase letters, `1` for uppercase, per base letter.
    tertiary: Vec<u8>,
    /// The original string.
    raw: String,
}

impl CollationKey {
    /// What: Build the collation key for `s`.
    ///
    /// Details:
    /// - Decomposes with NFD so precomposed and decomposed inputs produce the same key
    ///   at the first three levels.
    pub fn new(s: &str) -> Self {
        let mut primary = String::with_capacity(s.len());
        let mut secondary: Vec<u32> = Vec::with_capacity(s.len());
        let mut tertiary: Vec<u8> = Vec::with_capacity(s.len());
        let mut marks: Vec<u32> = Vec::new();
        let mut seen_base = false;

        for c in s.nfd() {
            if is_combining_mark(c) {
                marks.push(u32::from(c));
                continue;
            }
            if seen_base {
                secondary.append(&mut marks);
                secondary.push(0);
            } else {
                // Leading marks without a base letter still count at level 2.
                secondary.append(&mut marks);
            }
            seen_base = true;
            if let Some(base) = fold(c) {
                marks.push(FOLDED_MARK);
                primary.push_str(base);
            } else {
                primary.extend(c.to_lowercase());
            }
            tertiary.push(u8::from(c.is_uppercase()));
        }
        secondary.append(&mut marks);
        if seen_base {
            secondary.push(0);
        }

        Self {
            primary,
            secondary,
            tertiary,
            raw: s.to_string(),
        }
    }
}

/// Compare two strings with locale-aware ordering.
pub fn compare(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
