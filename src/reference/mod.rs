// src/reference/mod.rs - Canonical country reference data
use anyhow::{bail, Result};
use log::debug;
use std::collections::HashSet;

pub mod countries;

/// Supplies the canonical country display names used as the fuzzy-match
/// universe. Names must be English, Latin script.
pub trait CountryReference: Send + Sync {
    fn country_names(&self) -> Vec<String>;
}

/// The built-in short-name list.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCountryReference;

impl CountryReference for StaticCountryReference {
    fn country_names(&self) -> Vec<String> {
        countries::COUNTRY_SHORT_NAMES
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

/// A caller-provided list, mostly for tests and custom universes.
#[derive(Debug, Clone, Default)]
pub struct ListCountryReference {
    names: Vec<String>,
}

impl ListCountryReference {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl CountryReference for ListCountryReference {
    fn country_names(&self) -> Vec<String> {
        self.names.clone()
    }
}

/// Pulls the list from `reference`, trims and de-duplicates it (first
/// occurrence wins, order kept). An empty result is a configuration error.
pub fn load_canonical_names(reference: &dyn CountryReference) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let names: Vec<String> = reference
        .country_names()
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .filter(|n| seen.insert(n.clone()))
        .collect();

    if names.is_empty() {
        bail!("Canonical country list is empty; fuzzy resolution cannot run");
    }
    debug!("Loaded {} canonical country names", names.len());
    Ok(names)
}
