// src/batch/short_name.rs - Adds a Short_Name column derived from fund names
use anyhow::{anyhow, Result};
use indicatif::ProgressBar;

use super::table::Table;
use crate::contacts::short_name::extract_short_name;
use crate::utils::progress_bars::logging::ResolutionLogger;

pub const NAME_COLUMN: &str = "Investors";
pub const SHORT_NAME_COLUMN: &str = "Short_Name";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortNameSummary {
    pub total: usize,
    pub changed: usize,
    pub unchanged: usize,
}

pub fn add_short_name_column(
    table: &mut Table,
    name_column: &str,
    logger: &ResolutionLogger,
    progress: Option<&ProgressBar>,
) -> Result<ShortNameSummary> {
    let col = table
        .column_index(name_column)
        .ok_or_else(|| anyhow!("Column '{}' not found in input", name_column))?;

    let mut summary = ShortNameSummary {
        total: table.len(),
        ..Default::default()
    };
    let mut short_names = Vec::with_capacity(table.len());

    for row in 0..table.len() {
        let name = table.cell(row, col).unwrap_or("");
        let short = extract_short_name(name);
        if short == name {
            summary.unchanged += 1;
            logger.log_row(row, name, &short, "unchanged");
        } else {
            summary.changed += 1;
            logger.log_row(row, name, &short, "shortened");
        }
        if let Some(pb) = progress {
            pb.inc(1);
        }
        short_names.push(short);
    }

    table.set_column(SHORT_NAME_COLUMN, short_names)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::progress_bars::logging::EnrichmentTask;

    #[test]
    fn test_add_short_name_column() {
        let csv = "Investors,HQ Location\n\
                   Sequoia Capital Partners,USA\n\
                   Andreessen Horowitz,USA\n\
                   ,\n";
        let mut table = Table::from_reader(csv.as_bytes()).unwrap();
        let logger = ResolutionLogger::new(EnrichmentTask::ShortName);
        let summary = add_short_name_column(&mut table, NAME_COLUMN, &logger, None).unwrap();

        assert_eq!(summary.total, 3);
        assert_eq!(summary.changed, 1);
        assert_eq!(summary.unchanged, 2);

        let col = table.column_index(SHORT_NAME_COLUMN).unwrap();
        assert_eq!(table.cell(0, col), Some("Sequoia"));
        assert_eq!(table.cell(1, col), Some("Andreessen Horowitz"));
        assert_eq!(table.cell(2, col), None);
    }

    #[test]
    fn test_missing_name_column() {
        let mut table = Table::from_reader("Name\nAcme Ltd\n".as_bytes()).unwrap();
        let logger = ResolutionLogger::new(EnrichmentTask::ShortName);
        assert!(add_short_name_column(&mut table, NAME_COLUMN, &logger, None).is_err());
    }
}
