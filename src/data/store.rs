//! Raw row store with stable row identities

use std::collections::HashMap;

use super::types::{CellValue, RawRow, Row, RowId};

/// The unfiltered, unsorted rows as ingested
///
/// Row ids come from a counter that survives reloads, so an id is never
/// handed out twice for the lifetime of the store. `revision` changes on
/// every mutation and keys memoized views of the rows.
#[derive(Debug, Default)]
pub struct RowStore {
    rows: Vec<Row>,
    index: HashMap<RowId, usize>,
    next_id: u64,
    revision: u64,
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows, assigning fresh ids
    pub fn load(&mut self, raw: Vec<RawRow>) {
        self.rows = raw
            .into_iter()
            .map(|cells| {
                let id = RowId(self.next_id);
                self.next_id += 1;
                Row::new(id, cells)
            })
            .collect();
        self.index = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.id(), i))
            .collect();
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.load(Vec::new());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn get(&self, raw_index: usize) -> Option<&Row> {
        self.rows.get(raw_index)
    }

    /// Raw-store position of a row id; `None` for stale ids
    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Write one cell; returns false (and changes nothing) for a bad index
    pub fn set_cell(&mut self, raw_index: usize, column_key: &str, value: CellValue) -> bool {
        match self.rows.get_mut(raw_index) {
            Some(row) => {
                row.set(column_key, value);
                self.revision += 1;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(n: usize) -> Vec<RawRow> {
        (0..n).map(|_| RawRow::new()).collect()
    }

    #[test]
    fn test_ids_unique_and_indexed() {
        let mut store = RowStore::new();
        store.load(raw(3));
        for (i, row) in store.rows().iter().enumerate() {
            assert_eq!(store.index_of(row.id()), Some(i));
        }
    }

    #[test]
    fn test_ids_never_reused_after_reload() {
        let mut store = RowStore::new();
        store.load(raw(2));
        let old: Vec<RowId> = store.rows().iter().map(Row::id).collect();
        store.load(raw(2));
        for id in old {
            assert_eq!(store.index_of(id), None);
        }
        assert_eq!(store.rows()[0].id(), RowId(2));
    }

    #[test]
    fn test_set_cell_bumps_revision() {
        let mut store = RowStore::new();
        store.load(raw(1));
        let rev = store.revision();
        assert!(store.set_cell(0, "a", CellValue::Number(1.0)));
        assert!(store.revision() > rev);
        assert!(!store.set_cell(5, "a", CellValue::Null));
    }
}
