//! Tabular data: values, type inference, formatting, ordering and filtering

pub mod compare;
pub mod format;
pub mod infer;
pub mod pipeline;
pub mod store;
pub mod types;

pub use compare::{compare_cells, natural_cmp, SortDirection, SortState};
pub use format::{format_cell_value, format_date, format_number};
pub use infer::{infer_column_type, infer_data_type, parse_date, parse_number};
pub use pipeline::{matches_filters, run_pipeline, FilterState};
pub use store::RowStore;
pub use types::{CellValue, Column, DataType, Dataset, RawRow, Row, RowId, DEFAULT_COLUMN_WIDTH};
