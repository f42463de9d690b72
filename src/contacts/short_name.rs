// src/contacts/short_name.rs - Short display names for fund and investor names
use once_cell::sync::Lazy;
use regex::Regex;

/// Corporate and fund suffixes, longest forms first. Each is stripped at most
/// once, in this order, and only at the end of the name.
const SUFFIX_PATTERNS: &[&str] = &[
    r"\s+Venture\s+Capital\s+Partners?",
    r"\s+Venture\s+Partners?",
    r"\s+Venture\s+Capital",
    r"\s+Ventures",
    r"\s+Venture",
    r"\s+Investment\s+Management",
    r"\s+Investment\s+Manager",
    r"\s+Investment\s+Partners?",
    r"\s+Investment\s+Group",
    r"\s+Investments?",
    r"\s+Capital\s+Partners?",
    r"\s+Capital\s+Management",
    r"\s+Capital\s+Group",
    r"\s+Capital",
    r"\s+Partners?\s+LP",
    r"\s+Partners?\s+LLC",
    r"\s+Partners?",
    r"\s+Management\s+Company",
    r"\s+Management",
    r"\s+Group",
    r"\s+Fund",
    r"\s+Holdings?",
    r"\s+LLC",
    r"\s+LP",
    r"\s+Ltd\.?",
    r"\s+Limited",
    r"\s+Inc\.?",
    r"\s+Incorporated",
    r"\s+Corp\.?",
    r"\s+Corporation",
    r"\s+Company",
    r"\s+Co\.?",
    r"\s+VC",
];

static SUFFIX_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    SUFFIX_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!(r"(?i){}$", p)).expect("valid suffix regex"))
        .collect()
});

/// Strips common legal and fund suffixes from `name`.
///
/// "Sequoia Capital Partners" → "Sequoia", "Acme Capital Group" → "Acme".
/// If stripping leaves fewer than two characters the trimmed original is
/// returned instead. Blank input comes back unchanged.
pub fn extract_short_name(name: &str) -> String {
    let original = name.trim();
    if original.is_empty() {
        return name.to_string();
    }

    let mut short = original.to_string();
    for re in SUFFIX_RES.iter() {
        if let std::borrow::Cow::Owned(stripped) = re.replace(&short, "") {
            short = stripped.trim_end().to_string();
        }
    }

    let short = short.split_whitespace().collect::<Vec<_>>().join(" ");
    if short.chars().count() < 2 {
        original.to_string()
    } else {
        short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_fund_suffixes() {
        assert_eq!(extract_short_name("Sequoia Capital Partners"), "Sequoia");
        assert_eq!(extract_short_name("Andreessen Horowitz"), "Andreessen Horowitz");
        assert_eq!(extract_short_name("Gulf Venture Capital"), "Gulf");
        assert_eq!(extract_short_name("Wamda Investments"), "Wamda");
        assert_eq!(extract_short_name("BECO Capital"), "BECO");
    }

    #[test]
    fn test_strips_stacked_legal_suffixes() {
        assert_eq!(extract_short_name("Acme Capital Group"), "Acme");
        assert_eq!(extract_short_name("Falcon Partners LLC"), "Falcon");
        // Single pass: "Holdings" is checked before "Ltd." is removed.
        assert_eq!(extract_short_name("Acme Holdings Ltd."), "Acme Holdings");
        assert_eq!(extract_short_name("Oasis Management Company"), "Oasis");
    }

    #[test]
    fn test_case_insensitive_and_anchored() {
        assert_eq!(extract_short_name("north star ventures"), "north star");
        // Suffix words in the middle stay.
        assert_eq!(extract_short_name("Capital Factory Austin"), "Capital Factory Austin");
    }

    #[test]
    fn test_keeps_original_when_too_short() {
        assert_eq!(extract_short_name("  A Capital  "), "A Capital");
        assert_eq!(extract_short_name("Ventures"), "Ventures");
        assert_eq!(extract_short_name(""), "");
        assert_eq!(extract_short_name("   "), "   ");
    }

    #[test]
    fn test_collapses_internal_whitespace() {
        assert_eq!(extract_short_name("Blue   Ocean   Fund"), "Blue Ocean");
    }
}
