//! CSV data source
//!
//! RFC 4180 parsing via the csv crate. The first record is the header row;
//! blank lines are skipped and short records are padded with nulls.

use std::path::Path;

use crate::data::Dataset;

/// Error type for loading a dataset
#[derive(Debug, Clone)]
pub struct SourceError {
    pub message: String,
    pub line: Option<usize>,
}

impl SourceError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
        }
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "CSV parse error at line {}: {}", line, self.message),
            None => write!(f, "CSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for SourceError {}

/// Read and parse a CSV file
pub fn load_csv(path: &Path) -> Result<Dataset, SourceError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SourceError::new(format!("{}: {}", path.display(), e)))?;
    let dataset = parse_csv(&content)?;
    tracing::info!(
        path = %path.display(),
        columns = dataset.columns.len(),
        rows = dataset.rows.len(),
        "loaded csv"
    );
    Ok(dataset)
}

/// Parse CSV text into a dataset with inferred column types
pub fn parse_csv(content: &str) -> Result<Dataset, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut records: Vec<Vec<String>> = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| SourceError {
            line: e.position().map(|p| p.line() as usize),
            message: e.to_string(),
        })?;

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        let fields: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        if headers.is_none() {
            headers = Some(unique_headers(fields));
        } else {
            records.push(fields);
        }
    }

    let headers = headers.ok_or_else(|| SourceError::new("missing header row"))?;
    Ok(Dataset::from_records(headers, records))
}

/// Trim header names, naming blanks by position and suffixing duplicates
fn unique_headers(fields: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    fields
        .into_iter()
        .enumerate()
        .map(|(i, field)| {
            let base = match field.trim() {
                "" => format!("column{}", i + 1),
                name => name.to_string(),
            };
            let mut key = base.clone();
            let mut n = 2;
            while !seen.insert(key.clone()) {
                key = format!("{}_{}", base, n);
                n += 1;
            }
            key
        })
        .collect()
}
