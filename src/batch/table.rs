// src/batch/table.rs - Minimal in-memory CSV table
use anyhow::{bail, Context, Result};
use log::debug;
use std::io::{Read, Write};
use std::path::Path;

/// A header row plus string cells. Short rows are padded so every row has
/// one cell per header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width.max(row.len()), String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn read_csv(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        Self::from_reader(file).with_context(|| format!("Failed to parse CSV file: {}", path.display()))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers: Vec<String> = reader
            .headers()
            .context("Failed to read CSV header row")?
            .iter()
            .map(|h| h.to_string())
            .collect();
        if headers.is_empty() {
            bail!("CSV input has no header row");
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.with_context(|| format!("Failed to read CSV row {}", idx + 1))?;
            rows.push(record.iter().map(|c| c.to_string()).collect());
        }
        debug!("Read {} rows with {} columns", rows.len(), headers.len());
        Ok(Self::new(headers, rows))
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
        self.to_writer(file)
            .with_context(|| format!("Failed to write CSV file: {}", path.display()))
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
        writer.write_record(&self.headers).context("Failed to write CSV header row")?;
        for row in &self.rows {
            writer.write_record(row).context("Failed to write CSV row")?;
        }
        writer.flush().context("Failed to flush CSV output")?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First header matching one of `candidates`, compared trimmed and
    /// case-insensitively. Candidates are expected in lower case.
    pub fn find_column(&self, candidates: &[&str]) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| candidates.contains(&h.trim().to_lowercase().as_str()))
    }

    /// Column index for an exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell text, or None for a blank cell (the missing-value sentinel).
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }

    /// Overwrites the named column, or appends it when absent.
    pub fn set_column(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        if values.len() != self.rows.len() {
            bail!(
                "Column '{}' has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            );
        }
        match self.column_index(name) {
            Some(col) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[col] = value;
                }
            }
            None => {
                // Cells past the old header width stay, shifted right of the
                // new column.
                let col = self.headers.len();
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    if row.len() < col {
                        row.resize(col, String::new());
                    }
                    row.insert(col, value);
                }
            }
        }
        Ok(())
    }

    /// New table holding only the rows for which `keep` returns true.
    pub fn filter_rows<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&[String]) -> bool,
    {
        Table {
            headers: self.headers.clone(),
            rows: self.rows.iter().filter(|r| keep(r.as_slice())).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let csv = "Investors,HQ Location\nAlpha Ventures,\"Dubai, UAE\"\nBeta Capital,\nGamma\n";
        Table::from_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_read_pads_short_rows() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert_eq!(table.headers(), &["Investors", "HQ Location"]);
        assert_eq!(table.cell(0, 1), Some("Dubai, UAE"));
        assert_eq!(table.cell(1, 1), None);
        assert_eq!(table.cell(2, 1), None);
    }

    #[test]
    fn test_find_column_case_insensitive() {
        let table = sample();
        assert_eq!(table.find_column(&["hq location", "hq"]), Some(1));
        assert_eq!(table.find_column(&["country"]), None);
    }

    #[test]
    fn test_set_column_appends_then_overwrites() {
        let mut table = sample();
        table
            .set_column("country", vec!["A".into(), "".into(), "C".into()])
            .unwrap();
        assert_eq!(table.headers().len(), 3);
        assert_eq!(table.cell(2, 2), Some("C"));

        table
            .set_column("country", vec!["X".into(), "Y".into(), "Z".into()])
            .unwrap();
        assert_eq!(table.headers().len(), 3);
        assert_eq!(table.cell(0, 2), Some("X"));

        assert!(table.set_column("country", vec![]).is_err());
    }

    #[test]
    fn test_set_column_keeps_cells_of_overlong_rows() {
        let mut table = Table::from_reader("a,b\n1,2,3\n4\n".as_bytes()).unwrap();
        table
            .set_column("c", vec!["x".into(), "y".into()])
            .unwrap();

        assert_eq!(table.column_index("c"), Some(2));
        assert_eq!(table.cell(0, 2), Some("x"));
        assert_eq!(table.cell(0, 3), Some("3"));
        assert_eq!(table.cell(1, 1), None);
        assert_eq!(table.cell(1, 2), Some("y"));
    }

    #[test]
    fn test_filter_rows() {
        let table = sample();
        let with_location = table.filter_rows(|row| !row[1].is_empty());
        assert_eq!(with_location.len(), 1);
        assert_eq!(with_location.headers(), table.headers());
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = sample();
        table.write_csv(&path).unwrap();
        assert_eq!(Table::read_csv(&path).unwrap(), table);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = Table::read_csv(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open CSV file"));
    }
}
