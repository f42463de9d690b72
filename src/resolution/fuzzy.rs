// src/resolution/fuzzy.rs - Weighted token similarity against the canonical country list
use log::debug;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use strsim::normalized_levenshtein;

use super::normalize::segments;

pub const DEFAULT_SEGMENT_CUTOFF: f64 = 90.0;
pub const DEFAULT_WHOLE_STRING_CUTOFF: f64 = 94.0;

/// Length ratio below which the full-string comparators are used.
const PARTIAL_LENGTH_RATIO: f64 = 1.5;
/// Length ratio past which partial matches are down-weighted further.
const LONG_LENGTH_RATIO: f64 = 8.0;
const TOKEN_SCALE: f64 = 0.95;

/// Prepares a string for scoring: lower-case, anything that is not
/// alphanumeric becomes a space, whitespace collapsed.
pub fn process_for_scoring(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Edit-distance similarity on a 0-100 scale.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    normalized_levenshtein(a, b) * 100.0
}

/// Best [`ratio`] of the shorter string against every equally long window of
/// the longer one.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = short.chars().count();
    let long_chars: Vec<char> = long.chars().collect();
    if short_len == 0 {
        return 0.0;
    }
    if short_len == long_chars.len() {
        return ratio(short, long);
    }

    let mut best = 0.0_f64;
    for start in 0..=(long_chars.len() - short_len) {
        let window: String = long_chars[start..start + short_len].iter().collect();
        let score = ratio(short, &window);
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sets<'a>(a: &'a str, b: &'a str) -> (Vec<&'a str>, Vec<&'a str>, Vec<&'a str>) {
    let set_a: BTreeSet<&str> = a.split_whitespace().collect();
    let set_b: BTreeSet<&str> = b.split_whitespace().collect();
    let intersection = set_a.intersection(&set_b).copied().collect();
    let diff_ab = set_a.difference(&set_b).copied().collect();
    let diff_ba = set_b.difference(&set_a).copied().collect();
    (intersection, diff_ab, diff_ba)
}

/// [`ratio`] after sorting the tokens of both strings.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Compares the shared tokens against each side's remainder. A string whose
/// tokens are a subset of the other's scores 100.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let (intersection, diff_ab, diff_ba) = token_sets(a, b);
    if !intersection.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let diff_ab = diff_ab.join(" ");
    let diff_ba = diff_ba.join(" ");
    if intersection.is_empty() {
        return ratio(&diff_ab, &diff_ba);
    }

    let sect = intersection.join(" ");
    let combined_ab = format!("{} {}", sect, diff_ab);
    let combined_ba = format!("{} {}", sect, diff_ba);
    ratio(&sect, &combined_ab)
        .max(ratio(&sect, &combined_ba))
        .max(ratio(&combined_ab, &combined_ba))
}

fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let (intersection, _, _) = token_sets(a, b);
    if !intersection.is_empty() {
        return 100.0;
    }
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Weighted similarity on a 0-100 scale, insensitive to case and token order.
///
/// Strings of similar length are compared whole (plain, token-sorted and
/// token-set ratios). When one is at least 1.5x longer, partial window
/// matches are considered as well, scaled down by 0.9, or 0.6 past an 8x
/// length difference.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let a = process_for_scoring(a);
    let b = process_for_scoring(b);
    weighted_ratio_processed(&a, &b)
}

fn weighted_ratio_processed(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let base = ratio(a, b);
    if len_ratio < PARTIAL_LENGTH_RATIO {
        let token_sort = token_sort_ratio(a, b) * TOKEN_SCALE;
        let token_set = token_set_ratio(a, b) * TOKEN_SCALE;
        return base.max(token_sort).max(token_set);
    }

    let partial_scale = if len_ratio <= LONG_LENGTH_RATIO { 0.9 } else { 0.6 };
    let partial = partial_ratio(a, b) * partial_scale;
    let partial_token = partial_token_ratio(a, b) * TOKEN_SCALE * partial_scale;
    base.max(partial).max(partial_token)
}

/// The best canonical match found for one query string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyCandidate {
    pub query: String,
    pub country: String,
    pub score: f64,
}

/// The canonical country universe, pre-processed once for scoring.
#[derive(Debug, Clone)]
pub struct CanonicalCountries {
    names: Vec<String>,
    processed: Vec<String>,
}

impl CanonicalCountries {
    pub fn new(names: Vec<String>) -> Self {
        let processed = names.iter().map(|n| process_for_scoring(n)).collect();
        Self { names, processed }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Highest scoring country for `query`. Ties keep the earliest name in
    /// list order.
    pub fn best_match(&self, query: &str) -> Option<FuzzyCandidate> {
        let processed_query = process_for_scoring(query);
        if processed_query.is_empty() {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;
        for (idx, candidate) in self.processed.iter().enumerate() {
            let score = weighted_ratio_processed(&processed_query, candidate);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((idx, score));
            }
        }

        best.map(|(idx, score)| FuzzyCandidate {
            query: query.to_string(),
            country: self.names[idx].clone(),
            score,
        })
    }

    /// Like [`best_match`](Self::best_match) but only returns a candidate
    /// scoring at least `cutoff`.
    pub fn best_match_above(&self, query: &str, cutoff: f64) -> Option<FuzzyCandidate> {
        self.best_match(query).filter(|c| c.score >= cutoff)
    }
}

/// Last-resort layer: approximate matching of segments, then of the whole
/// string, against the canonical list.
#[derive(Debug, Clone)]
pub struct FuzzyResolver {
    countries: CanonicalCountries,
    segment_cutoff: f64,
    whole_string_cutoff: f64,
    /// Normalized terms that are skipped instead of scored
    excluded: HashSet<String>,
}

impl FuzzyResolver {
    pub fn new(countries: CanonicalCountries, segment_cutoff: f64, whole_string_cutoff: f64) -> Self {
        Self {
            countries,
            segment_cutoff,
            whole_string_cutoff,
            excluded: HashSet::new(),
        }
    }

    /// Terms (already normalized) that never produce a fuzzy match on their
    /// own, such as region names.
    pub fn with_excluded_terms<I>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.excluded.extend(terms);
        self
    }

    fn is_excluded(&self, term: &str) -> bool {
        self.excluded.contains(term)
    }

    pub fn countries(&self) -> &CanonicalCountries {
        &self.countries
    }

    /// Scans segments right to left and accepts the first whose best match
    /// clears the segment cutoff. Failing that, the whole normalized string
    /// must clear the stricter whole-string cutoff.
    pub fn resolve_fuzzy(&self, norm: &str) -> Option<ResolvedFuzzy> {
        for segment in segments(norm).into_iter().rev() {
            if self.is_excluded(segment) {
                debug!("Skipping non-country term '{}'", segment);
                continue;
            }
            if let Some(candidate) = self.countries.best_match_above(segment, self.segment_cutoff) {
                debug!(
                    "Fuzzy segment '{}' matched '{}' ({:.1})",
                    segment, candidate.country, candidate.score
                );
                return Some(ResolvedFuzzy {
                    candidate,
                    whole_string: false,
                });
            }
        }

        if self.is_excluded(norm) {
            return None;
        }
        self.countries
            .best_match_above(norm, self.whole_string_cutoff)
            .map(|candidate| {
                debug!(
                    "Fuzzy whole string '{}' matched '{}' ({:.1})",
                    norm, candidate.country, candidate.score
                );
                ResolvedFuzzy {
                    candidate,
                    whole_string: true,
                }
            })
    }

    /// Best candidate per segment (right to left) and for the whole string,
    /// regardless of cutoffs.
    pub fn candidates(&self, norm: &str) -> (Vec<FuzzyCandidate>, Option<FuzzyCandidate>) {
        let per_segment = segments(norm)
            .into_iter()
            .rev()
            .filter_map(|segment| self.countries.best_match(segment))
            .collect();
        (per_segment, self.countries.best_match(norm))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFuzzy {
    pub candidate: FuzzyCandidate,
    pub whole_string: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn countries(names: &[&str]) -> CanonicalCountries {
        CanonicalCountries::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_process_for_scoring() {
        assert_eq!(process_for_scoring("St. Kitts  and Nevis"), "st kitts and nevis");
        assert_eq!(process_for_scoring("Cote d'Ivoire"), "cote d ivoire");
        assert_eq!(process_for_scoring("---"), "");
    }

    #[test]
    fn test_ratio_bounds() {
        assert_eq!(ratio("saudi arabia", "saudi arabia"), 100.0);
        assert_eq!(ratio("", "qatar"), 0.0);
        assert!(ratio("saudi arabi", "saudi arabia") > 91.0);
    }

    #[test]
    fn test_partial_ratio_finds_substring() {
        assert_eq!(partial_ratio("arabia", "saudi arabia"), 100.0);
        assert!(partial_ratio("xyz", "saudi arabia") < 50.0);
    }

    #[test]
    fn test_token_order_insensitive() {
        assert_eq!(token_sort_ratio("arabia saudi", "saudi arabia"), 100.0);
        assert_eq!(token_set_ratio("republic czech", "czech republic"), 100.0);
        assert!(weighted_ratio("Arabia Saudi", "saudi arabia") >= 94.9);
    }

    #[test]
    fn test_weighted_ratio_is_case_insensitive() {
        assert_eq!(weighted_ratio("SAUDI ARABIA", "saudi arabia"), 100.0);
    }

    #[test]
    fn test_weighted_ratio_scales_partial_matches() {
        // "states" appears verbatim but is far shorter than the candidate
        let score = weighted_ratio("states", "United States");
        assert!((score - 90.0).abs() < 1e-9, "got {}", score);

        // Past 8x the partial scale drops to 0.6
        let long = weighted_ratio("uk", "United States Minor Outlying Islands");
        assert!(long <= 60.0, "got {}", long);
    }

    #[test]
    fn test_partial_scale_switches_only_past_8x() {
        // 2 vs 16 characters: exactly 8x keeps the 0.9 scale
        let at_limit = weighted_ratio("ab", "abcdefgh ijklmno");
        assert!((at_limit - 90.0).abs() < 1e-9, "got {}", at_limit);

        // 2 vs 18 characters: 9x uses 0.6
        let past_limit = weighted_ratio("ab", "abcdefgh ijklmnopq");
        assert!((past_limit - 60.0).abs() < 1e-9, "got {}", past_limit);
    }

    #[test]
    fn test_best_match_prefers_earliest_on_tie() {
        let list = countries(&["Alpha", "Alpha"]);
        let best = list.best_match("alpha").unwrap();
        assert_eq!(best.country, "Alpha");
        assert_eq!(best.score, 100.0);

        let list = countries(&["Niger", "Nigeria"]);
        assert_eq!(list.best_match("nigeria").unwrap().country, "Nigeria");
    }

    #[test]
    fn test_best_match_empty_query() {
        let list = countries(&["Qatar"]);
        assert!(list.best_match("").is_none());
        assert!(list.best_match(" ,- ").is_none());
    }

    #[test]
    fn test_resolve_fuzzy_segment_threshold() {
        let resolver = FuzzyResolver::new(
            countries(&["Saudi Arabia", "Switzerland", "Qatar"]),
            DEFAULT_SEGMENT_CUTOFF,
            DEFAULT_WHOLE_STRING_CUTOFF,
        );

        let hit = resolver.resolve_fuzzy("riyadh, saudi arabi").unwrap();
        assert_eq!(hit.candidate.country, "Saudi Arabia");
        assert!(!hit.whole_string);

        assert_eq!(
            resolver.resolve_fuzzy("switzerlnd").unwrap().candidate.country,
            "Switzerland"
        );
        assert!(resolver.resolve_fuzzy("asdkjqwe").is_none());
    }

    #[test]
    fn test_resolve_fuzzy_scans_segments_right_to_left() {
        let resolver = FuzzyResolver::new(
            countries(&["Qatar", "Switzerland"]),
            DEFAULT_SEGMENT_CUTOFF,
            DEFAULT_WHOLE_STRING_CUTOFF,
        );
        let hit = resolver.resolve_fuzzy("qatar, switzerland").unwrap();
        assert_eq!(hit.candidate.country, "Switzerland");
    }

    #[test]
    fn test_resolve_fuzzy_whole_string_fallback() {
        // A strict segment cutoff forces the whole-string pass
        let resolver = FuzzyResolver::new(countries(&["Saudi Arabia"]), 95.0, 90.0);
        let hit = resolver.resolve_fuzzy("saudi, arabi").unwrap();
        assert_eq!(hit.candidate.country, "Saudi Arabia");
        assert!(hit.whole_string);

        let strict = FuzzyResolver::new(countries(&["Saudi Arabia"]), 95.0, 94.0);
        assert!(strict.resolve_fuzzy("saudi, arabi").is_none());
    }

    #[test]
    fn test_candidates_are_reported_without_cutoff() {
        let resolver = FuzzyResolver::new(
            countries(&["Qatar", "Oman"]),
            DEFAULT_SEGMENT_CUTOFF,
            DEFAULT_WHOLE_STRING_CUTOFF,
        );
        let (per_segment, whole) = resolver.candidates("doha, qatar");
        assert_eq!(per_segment.len(), 2);
        assert_eq!(per_segment[0].query, "qatar");
        assert_eq!(per_segment[0].country, "Qatar");
        assert!(whole.is_some());
    }

    #[test]
    fn test_excluded_terms_are_never_fuzzy_matched() {
        let names = countries(&["North Korea", "Central African Republic"]);
        let open = FuzzyResolver::new(names.clone(), DEFAULT_SEGMENT_CUTOFF, DEFAULT_WHOLE_STRING_CUTOFF);
        assert!(open.resolve_fuzzy("africa").is_some());

        let guarded = FuzzyResolver::new(names, DEFAULT_SEGMENT_CUTOFF, DEFAULT_WHOLE_STRING_CUTOFF)
            .with_excluded_terms(vec!["africa".to_string()]);
        assert!(guarded.resolve_fuzzy("africa").is_none());
        assert!(guarded.resolve_fuzzy("lagos, africa").is_none());
        assert_eq!(
            guarded.resolve_fuzzy("africa, north korea").unwrap().candidate.country,
            "North Korea"
        );
    }
}
