// src/resolution/alias.rs - Exact synonym and city lookups
use log::{debug, warn};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::normalize::{normalize, segments};
use super::tables::{CITY_TO_COUNTRY, COUNTRY_SYNONYMS};
use super::ResolutionLayer;

/// Exact-match table from a normalized key to a canonical country name.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    entries: HashMap<String, &'static str>,
}

impl LookupTable {
    /// Builds the table, normalizing every key. Keys that collapse onto an
    /// existing key with a different country keep the first entry.
    pub fn from_pairs(pairs: &[(&str, &'static str)]) -> Self {
        let mut entries = HashMap::with_capacity(pairs.len());
        for (raw_key, country) in pairs {
            let key = normalize(raw_key);
            if key.is_empty() {
                continue;
            }
            match entries.entry(key) {
                Entry::Occupied(existing) => {
                    if existing.get() != country {
                        warn!(
                            "Lookup key '{}' maps to both '{}' and '{}', keeping '{}'",
                            existing.key(),
                            existing.get(),
                            country,
                            existing.get()
                        );
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(*country);
                }
            }
        }
        Self { entries }
    }

    pub fn country_aliases() -> Self {
        Self::from_pairs(COUNTRY_SYNONYMS)
    }

    pub fn cities() -> Self {
        Self::from_pairs(CITY_TO_COUNTRY)
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().copied()
    }
}

/// First two resolution layers: curated synonyms, then known cities.
#[derive(Debug, Clone)]
pub struct AliasResolver {
    aliases: LookupTable,
    cities: LookupTable,
}

impl Default for AliasResolver {
    fn default() -> Self {
        Self::new(LookupTable::country_aliases(), LookupTable::cities())
    }
}

impl AliasResolver {
    pub fn new(aliases: LookupTable, cities: LookupTable) -> Self {
        Self { aliases, cities }
    }

    pub fn aliases(&self) -> &LookupTable {
        &self.aliases
    }

    pub fn cities(&self) -> &LookupTable {
        &self.cities
    }

    /// Synonym pass. Segments are tried last to first since the country
    /// usually trails ("City, Country"), then the unsplit string.
    pub fn match_synonym(&self, norm: &str) -> Option<&'static str> {
        segments(norm)
            .into_iter()
            .rev()
            .find_map(|segment| self.aliases.get(segment))
            .or_else(|| self.aliases.get(norm))
    }

    /// City pass. Segments are tried in reading order, then the bare
    /// whitespace-separated words.
    pub fn match_city(&self, norm: &str) -> Option<&'static str> {
        segments(norm)
            .into_iter()
            .find_map(|segment| self.cities.get(segment))
            .or_else(|| norm.split_whitespace().find_map(|word| self.cities.get(word)))
    }

    /// Runs the synonym pass and, if it misses, the city pass.
    pub fn resolve_aliases(&self, norm: &str) -> Option<(&'static str, ResolutionLayer)> {
        if let Some(country) = self.match_synonym(norm) {
            debug!("Alias hit for '{}': {}", norm, country);
            return Some((country, ResolutionLayer::Alias));
        }
        if let Some(country) = self.match_city(norm) {
            debug!("City hit for '{}': {}", norm, country);
            return Some((country, ResolutionLayer::City));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_normalized_at_build_time() {
        let table = LookupTable::country_aliases();
        assert_eq!(table.get("turkiye"), Some("Turkey"));
        assert_eq!(table.get("espana"), Some("Spain"));
        assert_eq!(table.get("emiratos arabes unidos"), Some("United Arab Emirates"));
        assert_eq!(table.get("türkiye"), None);
    }

    #[test]
    fn test_conflicting_keys_keep_first_entry() {
        let table = LookupTable::from_pairs(&[("Georgia", "Georgia"), ("georgia", "United States")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("georgia"), Some("Georgia"));
    }

    #[test]
    fn test_synonym_reverse_scan() {
        let resolver = AliasResolver::default();
        assert_eq!(resolver.match_synonym("dubai, uae"), Some("United Arab Emirates"));
        assert_eq!(resolver.match_synonym("business bay, uae"), Some("United Arab Emirates"));
        // Rightmost known segment wins
        assert_eq!(resolver.match_synonym("uk, usa"), Some("United States"));
        assert_eq!(resolver.match_synonym("usa, uk"), Some("United Kingdom"));
    }

    #[test]
    fn test_synonym_whole_string_lookup() {
        let resolver = AliasResolver::new(
            LookupTable::from_pairs(&[("Dubai, UAE", "United Arab Emirates")]),
            LookupTable::default(),
        );
        assert_eq!(resolver.match_synonym("dubai, uae"), Some("United Arab Emirates"));
        assert_eq!(resolver.match_synonym("dubai"), None);
    }

    #[test]
    fn test_city_forward_scan() {
        let resolver = AliasResolver::default();
        assert_eq!(resolver.match_city("riyadh"), Some("Saudi Arabia"));
        assert_eq!(resolver.match_city("dubai, riyadh"), Some("United Arab Emirates"));
        assert_eq!(resolver.match_city("riyadh, dubai"), Some("Saudi Arabia"));
    }

    #[test]
    fn test_city_bare_word_scan() {
        let resolver = AliasResolver::default();
        assert_eq!(resolver.match_city("downtown dubai marina"), Some("United Arab Emirates"));
        assert_eq!(resolver.match_city("greater london area"), Some("United Kingdom"));
        assert_eq!(resolver.match_city("somewhere else"), None);
    }

    #[test]
    fn test_alias_precedes_city() {
        let resolver = AliasResolver::default();
        let (country, layer) = resolver.resolve_aliases("london, usa").unwrap();
        assert_eq!(country, "United States");
        assert_eq!(layer, ResolutionLayer::Alias);

        let (country, layer) = resolver.resolve_aliases("dubai").unwrap();
        assert_eq!(country, "United Arab Emirates");
        assert_eq!(layer, ResolutionLayer::City);
    }

    #[test]
    fn test_no_hit() {
        let resolver = AliasResolver::default();
        assert!(resolver.resolve_aliases("123 main st, nowhereland").is_none());
    }
}
