// src/batch/honorific.rs - Adds honorific and salutation columns for primary contacts
use anyhow::{anyhow, Context, Result};
use indicatif::ProgressBar;
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

use super::table::Table;
use crate::contacts::honorific::{
    build_salutation, honorific_from_inference, honorific_from_title, split_name, Honorific,
    NameInference,
};
use crate::utils::progress_bars::logging::ResolutionLogger;

/// Header names accepted for the contact title column, lower case.
pub const TITLE_COLUMNS: [&str; 3] = ["primary contact title", "contact title", "title"];
pub const CONTACT_COLUMN: &str = "Primary Contact";
pub const FIRST_NAME_COLUMN: &str = "First Name";
pub const LAST_NAME_COLUMN: &str = "Last Name";
pub const HONORIFIC_COLUMN: &str = "Honorific";
pub const SALUTATION_COLUMN: &str = "Salutation";

/// Previously fetched name-inference answers, keyed by lower-case first name.
#[derive(Debug, Clone, Default)]
pub struct InferenceCache {
    entries: HashMap<String, NameInference>,
}

impl InferenceCache {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No inference cache at {}, using titles only", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read inference cache: {}", path.display()))?;
        let entries: HashMap<String, NameInference> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse inference cache: {}", path.display()))?;
        Ok(Self::from_entries(entries))
    }

    /// Builds a cache from name → answer pairs; names are trimmed and
    /// lower-cased.
    pub fn from_entries(entries: HashMap<String, NameInference>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(name, v)| (name.trim().to_lowercase(), v))
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, first_name: &str) -> Option<&NameInference> {
        self.entries.get(&first_name.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HonorificSummary {
    pub total: usize,
    pub from_title: usize,
    pub from_inference: usize,
    pub mr: usize,
    pub ms: usize,
    pub dr: usize,
    pub needs_review: usize,
}

impl HonorificSummary {
    fn count(&mut self, honorific: Option<Honorific>) {
        match honorific {
            Some(Honorific::Mr) => self.mr += 1,
            Some(Honorific::Ms) => self.ms += 1,
            Some(Honorific::Dr) => self.dr += 1,
            None => self.needs_review += 1,
        }
    }

    pub fn resolved(&self) -> usize {
        self.mr + self.ms + self.dr
    }
}

fn infer(cache: &InferenceCache, first_name: &str) -> Option<Honorific> {
    if first_name.is_empty() {
        return None;
    }
    let entry = cache.lookup(first_name)?;
    honorific_from_inference(entry.gender.as_deref().unwrap_or(""), entry.probability)
}

/// Fills First Name / Last Name (when the table lacks them), Honorific and
/// Salutation. The title decides first; the inference cache only fills rows
/// the title left empty.
pub fn add_honorific_columns(
    table: &mut Table,
    cache: &InferenceCache,
    logger: &ResolutionLogger,
    progress: Option<&ProgressBar>,
) -> Result<HonorificSummary> {
    let contact_col = table
        .column_index(CONTACT_COLUMN)
        .ok_or_else(|| anyhow!("Column '{}' not found in input", CONTACT_COLUMN))?;
    let title_col = table.find_column(&TITLE_COLUMNS);
    if title_col.is_none() {
        debug!("No title column found, relying on the inference cache");
    }
    let name_cols = table
        .column_index(FIRST_NAME_COLUMN)
        .zip(table.column_index(LAST_NAME_COLUMN));

    let mut summary = HonorificSummary {
        total: table.len(),
        ..Default::default()
    };
    let mut first_names = Vec::with_capacity(table.len());
    let mut last_names = Vec::with_capacity(table.len());
    let mut honorifics = Vec::with_capacity(table.len());
    let mut salutations = Vec::with_capacity(table.len());

    for row in 0..table.len() {
        let full_name = table.cell(row, contact_col).unwrap_or("").trim();
        let (first, last) = match name_cols {
            Some((f, l)) => (
                table.cell(row, f).unwrap_or("").trim().to_string(),
                table.cell(row, l).unwrap_or("").trim().to_string(),
            ),
            None => split_name(full_name),
        };

        let by_title = title_col
            .and_then(|col| table.cell(row, col))
            .and_then(honorific_from_title);
        let honorific = match by_title {
            Some(h) => {
                summary.from_title += 1;
                Some(h)
            }
            None => {
                let inferred = infer(cache, &first);
                if inferred.is_some() {
                    summary.from_inference += 1;
                }
                inferred
            }
        };
        summary.count(honorific);

        let salutation = build_salutation(honorific, &first, &last, full_name);
        logger.log_row(
            row,
            full_name,
            &salutation,
            honorific.map(|h| h.as_str()).unwrap_or("needs review"),
        );
        if let Some(pb) = progress {
            pb.inc(1);
        }

        honorifics.push(honorific.map(|h| h.as_str().to_string()).unwrap_or_default());
        salutations.push(salutation);
        first_names.push(first);
        last_names.push(last);
    }

    if name_cols.is_none() {
        table.set_column(FIRST_NAME_COLUMN, first_names)?;
        table.set_column(LAST_NAME_COLUMN, last_names)?;
    }
    table.set_column(HONORIFIC_COLUMN, honorifics)?;
    table.set_column(SALUTATION_COLUMN, salutations)?;
    Ok(summary)
}

/// Rows with no honorific.
pub fn needs_review(table: &Table) -> Option<Table> {
    let col = table.column_index(HONORIFIC_COLUMN)?;
    Some(table.filter_rows(|row| row[col].is_empty()))
}
