//! Core data model types: columns, cell values, rows, datasets

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::infer::infer_column_type;

/// Display width used when a column carries no width of its own
pub const DEFAULT_COLUMN_WIDTH: f32 = 150.0;

/// Classification of a column's values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Text,
    Number,
    Date,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Text => write!(f, "text"),
            DataType::Number => write!(f, "number"),
            DataType::Date => write!(f, "date"),
        }
    }
}

/// A raw cell value as ingested or edited
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Null and empty text both count as "no value"
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Null => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Stringified form used for filtering and as the edit draft
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<Option<&str>> for CellValue {
    fn from(s: Option<&str>) -> Self {
        s.map_or(CellValue::Null, CellValue::from)
    }
}

/// Column descriptor
///
/// Everything but `width` is fixed once loaded; the column layout manager
/// owns the live widths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub key: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub data_type: DataType,
    #[serde(default = "default_sortable")]
    pub sortable: bool,
    #[serde(default = "default_width")]
    pub width: f32,
}

fn default_sortable() -> bool {
    true
}

fn default_width() -> f32 {
    DEFAULT_COLUMN_WIDTH
}

impl Column {
    pub fn new(key: impl Into<String>, data_type: DataType) -> Self {
        let key = key.into();
        Self {
            name: key.clone(),
            key,
            data_type,
            sortable: true,
            width: DEFAULT_COLUMN_WIDTH,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }
}

/// Stable row identity, assigned once at ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// Column-keyed cell values, before an id is assigned
pub type RawRow = HashMap<String, CellValue>;

static NULL_CELL: CellValue = CellValue::Null;

/// A row in the raw row store
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    id: RowId,
    cells: RawRow,
}

impl Row {
    pub fn new(id: RowId, cells: RawRow) -> Self {
        Self { id, cells }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    /// Cell value for a column; absent keys read as `Null`
    pub fn get(&self, key: &str) -> &CellValue {
        self.cells.get(key).unwrap_or(&NULL_CELL)
    }

    pub fn set(&mut self, key: &str, value: CellValue) {
        self.cells.insert(key.to_string(), value);
    }

    pub fn cells(&self) -> &RawRow {
        &self.cells
    }
}

/// Input contract from the ingestion collaborator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Vec<Column>,
    pub rows: Vec<RawRow>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>, rows: Vec<RawRow>) -> Self {
        Self { columns, rows }
    }

    /// Build a dataset from header names and string records
    ///
    /// Empty strings become `Null`. Column types are inferred by sampling.
    pub fn from_records(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let rows: Vec<RawRow> = records
            .into_iter()
            .map(|record| {
                headers
                    .iter()
                    .enumerate()
                    .map(|(i, key)| {
                        let value = match record.get(i) {
                            Some(s) if !s.is_empty() => CellValue::Text(s.clone()),
                            _ => CellValue::Null,
                        };
                        (key.clone(), value)
                    })
                    .collect()
            })
            .collect();

        let columns = headers
            .into_iter()
            .map(|key| {
                let data_type = infer_column_type(rows.iter().filter_map(|row| row.get(&key)));
                Column::new(key, data_type)
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
