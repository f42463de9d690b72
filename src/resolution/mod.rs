// src/resolution/mod.rs - Free-text headquarters location → canonical country
//
// Layers are tried in a fixed order: curated synonyms, known cities, then
// fuzzy matching against the canonical country list. Anything that falls
// through comes back unresolved and goes to manual review.

pub mod alias;
pub mod fuzzy;
pub mod normalize;
pub mod tables;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::fmt;

use crate::reference::{load_canonical_names, CountryReference, StaticCountryReference};
use crate::utils::resolver_config::ResolverConfig;
use alias::AliasResolver;
use fuzzy::{CanonicalCountries, FuzzyCandidate, FuzzyResolver};
use normalize::{normalize, normalize_field, segments};
use tables::NON_COUNTRY_TERMS;

/// Which layer produced a country.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layer", rename_all = "snake_case")]
pub enum ResolutionLayer {
    Alias,
    City,
    FuzzySegment { score: f64 },
    FuzzyWholeString { score: f64 },
}

impl ResolutionLayer {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionLayer::Alias => "alias",
            ResolutionLayer::City => "city",
            ResolutionLayer::FuzzySegment { .. } => "fuzzy_segment",
            ResolutionLayer::FuzzyWholeString { .. } => "fuzzy_whole_string",
        }
    }
}

/// Outcome for one location. The string form is the canonical country name,
/// or the empty string when unresolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolvedCountry {
    Resolved {
        country: String,
        #[serde(flatten)]
        layer: ResolutionLayer,
    },
    Unresolved,
}

impl ResolvedCountry {
    fn resolved(country: impl Into<String>, layer: ResolutionLayer) -> Self {
        ResolvedCountry::Resolved {
            country: country.into(),
            layer,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResolvedCountry::Resolved { country, .. } => country,
            ResolvedCountry::Unresolved => "",
        }
    }

    pub fn layer(&self) -> Option<&ResolutionLayer> {
        match self {
            ResolvedCountry::Resolved { layer, .. } => Some(layer),
            ResolvedCountry::Unresolved => None,
        }
    }

}

impl fmt::Display for ResolvedCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every intermediate step for one input, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionTrace {
    pub raw: String,
    pub normalized: String,
    pub segments: Vec<String>,
    pub synonym_hit: Option<&'static str>,
    pub city_hit: Option<&'static str>,
    pub segment_candidates: Vec<FuzzyCandidate>,
    pub whole_string_candidate: Option<FuzzyCandidate>,
    pub outcome: ResolvedCountry,
}

/// Resolves headquarters locations to canonical country names.
///
/// Immutable once built, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct CountryResolver {
    aliases: AliasResolver,
    fuzzy: FuzzyResolver,
}

impl CountryResolver {
    /// Builds the resolver with the built-in alias and city tables.
    ///
    /// Fails if the reference yields no country names or the cutoffs are out
    /// of range.
    pub fn new(reference: &dyn CountryReference, config: &ResolverConfig) -> Result<Self> {
        Self::with_tables(reference, config, AliasResolver::default())
    }

    pub fn with_tables(
        reference: &dyn CountryReference,
        config: &ResolverConfig,
        aliases: AliasResolver,
    ) -> Result<Self> {
        config.validate().context("Invalid resolver configuration")?;
        let names = load_canonical_names(reference)
            .context("Failed to load canonical country names")?;
        let countries = CanonicalCountries::new(names);

        if aliases.aliases().is_empty() || aliases.cities().is_empty() {
            warn!("Alias or city table is empty, only fuzzy matching will apply");
        }

        let unknown: Vec<&str> = aliases
            .aliases()
            .values()
            .chain(aliases.cities().values())
            .filter(|c| !countries.contains(c))
            .collect();
        if !unknown.is_empty() {
            warn!(
                "{} lookup values are not in the canonical country list: {:?}",
                unknown.len(),
                unknown
            );
        }

        debug!(
            "Country resolver ready: {} aliases, {} cities, {} canonical countries",
            aliases.aliases().len(),
            aliases.cities().len(),
            countries.len()
        );

        Ok(Self {
            aliases,
            fuzzy: FuzzyResolver::new(countries, config.fuzzy_segment_cutoff, config.fuzzy_whole_cutoff)
                .with_excluded_terms(NON_COUNTRY_TERMS.iter().map(|t| normalize(t))),
        })
    }

    pub fn canonical_countries(&self) -> &CanonicalCountries {
        self.fuzzy.countries()
    }

    /// Resolves one raw location. Empty or unrecognizable input comes back
    /// as [`ResolvedCountry::Unresolved`].
    pub fn resolve_country(&self, raw: &str) -> ResolvedCountry {
        self.resolve_normalized(&normalize(raw))
    }

    /// Same as [`resolve_country`](Self::resolve_country) for a field that
    /// may be missing.
    pub fn resolve_field(&self, raw: Option<&str>) -> ResolvedCountry {
        self.resolve_normalized(&normalize_field(raw))
    }

    fn resolve_normalized(&self, norm: &str) -> ResolvedCountry {
        if norm.is_empty() {
            return ResolvedCountry::Unresolved;
        }

        if let Some((country, layer)) = self.aliases.resolve_aliases(norm) {
            return ResolvedCountry::resolved(country, layer);
        }

        match self.fuzzy.resolve_fuzzy(norm) {
            Some(hit) => {
                let layer = if hit.whole_string {
                    ResolutionLayer::FuzzyWholeString { score: hit.candidate.score }
                } else {
                    ResolutionLayer::FuzzySegment { score: hit.candidate.score }
                };
                ResolvedCountry::resolved(hit.candidate.country, layer)
            }
            None => {
                debug!("No country for '{}'", norm);
                ResolvedCountry::Unresolved
            }
        }
    }

    /// Runs every layer without short-circuiting and reports what each saw.
    pub fn explain(&self, raw: &str) -> ResolutionTrace {
        let normalized = normalize(raw);
        let (segment_candidates, whole_string_candidate) = if normalized.is_empty() {
            (Vec::new(), None)
        } else {
            self.fuzzy.candidates(&normalized)
        };

        ResolutionTrace {
            raw: raw.to_string(),
            segments: segments(&normalized).into_iter().map(String::from).collect(),
            synonym_hit: self.aliases.match_synonym(&normalized),
            city_hit: self.aliases.match_city(&normalized),
            segment_candidates,
            whole_string_candidate,
            outcome: self.resolve_country(raw),
            normalized,
        }
    }
}

static GLOBAL_RESOLVER: OnceCell<CountryResolver> = OnceCell::new();

/// Process-wide resolver over the built-in reference list, configured from
/// the environment on first use.
pub fn global_resolver() -> Result<&'static CountryResolver> {
    GLOBAL_RESOLVER.get_or_try_init(|| {
        let config = ResolverConfig::from_env();
        let resolver = CountryResolver::new(&StaticCountryReference, &config)?;
        info!(
            "🌍 Country resolver initialized with {} canonical countries",
            resolver.canonical_countries().len()
        );
        Ok(resolver)
    })
}
