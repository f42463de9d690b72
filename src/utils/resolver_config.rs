//! Cutoffs for the fuzzy resolution layer
//! Read from the environment so thresholds can be tuned without a rebuild

use anyhow::{bail, Result};
use log::{debug, info, warn};
use std::env;

use crate::resolution::fuzzy::{DEFAULT_SEGMENT_CUTOFF, DEFAULT_WHOLE_STRING_CUTOFF};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Minimum score (0-100) for a single segment to be accepted
    pub fuzzy_segment_cutoff: f64,
    /// Minimum score (0-100) for the whole-string fallback
    pub fuzzy_whole_cutoff: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fuzzy_segment_cutoff: DEFAULT_SEGMENT_CUTOFF,
            fuzzy_whole_cutoff: DEFAULT_WHOLE_STRING_CUTOFF,
        }
    }
}

fn cutoff_from_env(key: &str, default: f64) -> f64 {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<f64>().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}='{}', using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

impl ResolverConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let config = Self {
            fuzzy_segment_cutoff: cutoff_from_env("FUZZY_SEGMENT_CUTOFF", DEFAULT_SEGMENT_CUTOFF),
            fuzzy_whole_cutoff: cutoff_from_env("FUZZY_WHOLE_CUTOFF", DEFAULT_WHOLE_STRING_CUTOFF),
        };
        debug!("Resolver config: {:?}", config);
        config
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("FUZZY_SEGMENT_CUTOFF", self.fuzzy_segment_cutoff),
            ("FUZZY_WHOLE_CUTOFF", self.fuzzy_whole_cutoff),
        ] {
            if !(0.0..=100.0).contains(&value) {
                bail!("{} must be within 0-100, got {}", name, value);
            }
        }
        Ok(())
    }

    /// Log the current configuration
    pub fn log_config(&self) {
        info!("🌍 Fuzzy country matching cutoffs");
        info!("   Per segment: {:.1}", self.fuzzy_segment_cutoff);
        info!("   Whole string: {:.1}", self.fuzzy_whole_cutoff);
        if self.fuzzy_whole_cutoff < self.fuzzy_segment_cutoff {
            warn!("   Whole-string cutoff is looser than the segment cutoff");
        }
    }
}
