// src/resolution/normalize.rs

use unicode_normalization::UnicodeNormalization;

/// Characters treated as segment delimiters in addition to the comma.
const SEGMENT_DELIMITERS: [char; 3] = ['/', '|', ';'];

/// Canonicalizes a raw location string.
///
/// Diacritics are removed through NFKD decomposition and anything that is
/// still non-ASCII afterwards is dropped. `/`, `|` and `;` become commas,
/// whitespace runs collapse to one space and the result is trimmed and
/// lower-cased. Empty or whitespace-only input yields an empty string, which
/// callers treat as "unresolved".
pub fn normalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let folded: String = raw
        .nfkd()
        .filter(|c| c.is_ascii())
        .map(|c| if SEGMENT_DELIMITERS.contains(&c) { ',' } else { c })
        .collect();

    folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Same as [`normalize`] for a field that may be missing altogether.
pub fn normalize_field(raw: Option<&str>) -> String {
    raw.map(normalize).unwrap_or_default()
}

/// Splits a normalized location into its comma-delimited segments, trimmed
/// and with empty ones dropped. Order follows the input.
pub fn segments(norm: &str) -> Vec<&str> {
    norm.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
