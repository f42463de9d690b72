// src/batch/country.rs - Adds a resolved country column to a table of funds
use anyhow::{anyhow, Result};
use indicatif::ProgressBar;
use std::collections::BTreeMap;

use super::table::Table;
use crate::resolution::CountryResolver;
use crate::utils::progress_bars::logging::ResolutionLogger;

/// Header names accepted for the headquarters column, lower case.
pub const LOCATION_COLUMNS: [&str; 4] = ["hq location", "hq", "headquarters", "headquarter location"];
pub const COUNTRY_COLUMN: &str = "country";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountrySummary {
    pub total: usize,
    pub resolved: usize,
    pub needs_review: usize,
    /// Resolved rows per layer name ("alias", "city", ...)
    pub by_layer: BTreeMap<&'static str, usize>,
}

/// Picks the location column: an explicit header name if given, otherwise
/// the first header matching [`LOCATION_COLUMNS`].
pub fn locate_column(table: &Table, column_override: Option<&str>) -> Result<usize> {
    match column_override {
        Some(name) => table
            .column_index(name)
            .or_else(|| table.find_column(&[name.trim().to_lowercase().as_str()]))
            .ok_or_else(|| anyhow!("Column '{}' not found in input (have: {:?})", name, table.headers())),
        None => table.find_column(&LOCATION_COLUMNS).ok_or_else(|| {
            anyhow!(
                "Could not find the 'HQ Location' column (or an equivalent: {:?}); have: {:?}",
                LOCATION_COLUMNS,
                table.headers()
            )
        }),
    }
}

/// Resolves every row's location and writes the result to the `country`
/// column. Unresolved rows get an empty string.
pub fn add_country_column(
    table: &mut Table,
    resolver: &CountryResolver,
    location_col: usize,
    logger: &ResolutionLogger,
    progress: Option<&ProgressBar>,
    detailed_progress: bool,
) -> Result<CountrySummary> {
    let mut summary = CountrySummary {
        total: table.len(),
        ..Default::default()
    };
    let mut countries = Vec::with_capacity(table.len());

    for row in 0..table.len() {
        let raw = table.cell(row, location_col);
        let resolved = resolver.resolve_field(raw);

        match resolved.layer() {
            Some(layer) => {
                summary.resolved += 1;
                *summary.by_layer.entry(layer.as_str()).or_insert(0) += 1;
                logger.log_row(row, raw.unwrap_or(""), resolved.as_str(), layer.as_str());
            }
            None => {
                summary.needs_review += 1;
                logger.log_row(row, raw.unwrap_or(""), "", "needs review");
            }
        }

        if let Some(pb) = progress {
            pb.inc(1);
            if detailed_progress {
                pb.set_message(format!("{} → {}", raw.unwrap_or("—"), resolved));
            }
        }
        countries.push(resolved.as_str().to_string());
    }

    table.set_column(COUNTRY_COLUMN, countries)?;
    Ok(summary)
}

/// Rows whose country came back empty.
pub fn needs_review(table: &Table) -> Option<Table> {
    let col = table.column_index(COUNTRY_COLUMN)?;
    Some(table.filter_rows(|row| row[col].is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::StaticCountryReference;
    use crate::utils::progress_bars::logging::EnrichmentTask;
    use crate::utils::resolver_config::ResolverConfig;

    fn funds() -> Table {
        let csv = "Investors,HQ Location\n\
                   Alpha,\"Dubai, UAE\"\n\
                   Beta,Riyadh\n\
                   Gamma,\"123 Main St, Nowhereland\"\n\
                   Delta,\n\
                   Epsilon,Saudi Arabi\n";
        Table::from_reader(csv.as_bytes()).unwrap()
    }

    fn resolver() -> CountryResolver {
        CountryResolver::new(&StaticCountryReference, &ResolverConfig::default()).unwrap()
    }

    #[test]
    fn test_locate_column() {
        let table = funds();
        assert_eq!(locate_column(&table, None).unwrap(), 1);
        assert_eq!(locate_column(&table, Some("Investors")).unwrap(), 0);
        assert_eq!(locate_column(&table, Some("hq location")).unwrap(), 1);
        assert!(locate_column(&table, Some("Missing")).is_err());

        let no_hq = Table::from_reader("Name,City\nA,B\n".as_bytes()).unwrap();
        let err = locate_column(&no_hq, None).unwrap_err();
        assert!(err.to_string().contains("HQ Location"));
    }

    #[test]
    fn test_add_country_column_and_partition() {
        let mut table = funds();
        let logger = ResolutionLogger::new(EnrichmentTask::Country);
        let summary = add_country_column(&mut table, &resolver(), 1, &logger, None, false).unwrap();

        assert_eq!(summary.total, 5);
        assert_eq!(summary.resolved, 3);
        assert_eq!(summary.needs_review, 2);
        assert_eq!(summary.by_layer.get("alias"), Some(&1));
        assert_eq!(summary.by_layer.get("city"), Some(&1));
        assert_eq!(summary.by_layer.get("fuzzy_segment"), Some(&1));

        let col = table.column_index(COUNTRY_COLUMN).unwrap();
        assert_eq!(table.cell(0, col), Some("United Arab Emirates"));
        assert_eq!(table.cell(1, col), Some("Saudi Arabia"));
        assert_eq!(table.cell(2, col), None);
        assert_eq!(table.cell(3, col), None);
        assert_eq!(table.cell(4, col), Some("Saudi Arabia"));

        let review = needs_review(&table).unwrap();
        assert_eq!(review.len(), 2);
        assert_eq!(review.cell(0, 0), Some("Gamma"));
        assert_eq!(review.cell(1, 0), Some("Delta"));
    }

    #[test]
    fn test_needs_review_without_country_column() {
        assert!(needs_review(&funds()).is_none());
    }
}
