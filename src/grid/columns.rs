//! Column layout: visible order, pixel widths, resize and reorder drags

use std::collections::HashMap;

use crate::data::{Column, DEFAULT_COLUMN_WIDTH};

/// An in-progress resize drag
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeDrag {
    pub column_key: String,
    /// Column width when the drag started
    pub start_width: f32,
    /// Pointer x when the drag started
    pub start_x: f32,
}

/// Ordered visible columns and their widths
///
/// Only the order list and the width map are ever mutated here; row data is
/// never touched.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    order: Vec<String>,
    widths: HashMap<String, f32>,
    min_width: f32,
    max_width: f32,
    default_width: f32,
    resize: Option<ResizeDrag>,
    reorder_source: Option<String>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new(50.0, 500.0, DEFAULT_COLUMN_WIDTH)
    }
}

impl ColumnLayout {
    pub fn new(min_width: f32, max_width: f32, default_width: f32) -> Self {
        Self {
            order: Vec::new(),
            widths: HashMap::new(),
            min_width,
            max_width: max_width.max(min_width),
            default_width,
            resize: None,
            reorder_source: None,
        }
    }

    /// Reset order and widths from freshly loaded column descriptors
    pub fn load(&mut self, columns: &[Column]) {
        self.order = columns.iter().map(|c| c.key.clone()).collect();
        self.widths = columns.iter().map(|c| (c.key.clone(), c.width)).collect();
        self.resize = None;
        self.reorder_source = None;
    }

    pub fn clear(&mut self) {
        self.load(&[]);
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn key_at(&self, col_index: usize) -> Option<&str> {
        self.order.get(col_index).map(String::as_str)
    }

    pub fn position(&self, column_key: &str) -> Option<usize> {
        self.order.iter().position(|k| k == column_key)
    }

    /// Current width, falling back to the default for unknown columns
    pub fn width(&self, column_key: &str) -> f32 {
        self.widths
            .get(column_key)
            .copied()
            .unwrap_or(self.default_width)
    }

    pub fn widths(&self) -> &HashMap<String, f32> {
        &self.widths
    }

    /// Sum of the visible columns' widths
    pub fn total_width(&self) -> f32 {
        self.order.iter().map(|key| self.width(key)).sum()
    }

    pub fn min_width(&self) -> f32 {
        self.min_width
    }

    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    pub fn clamp_width(&self, width: f32) -> f32 {
        width.clamp(self.min_width, self.max_width)
    }

    /// Store a width for a column, clamped and rounded to whole pixels
    ///
    /// Returns true if the stored width changed.
    pub fn apply_width(&mut self, column_key: &str, width: f32) -> bool {
        if self.position(column_key).is_none() {
            return false;
        }
        let width = self.clamp_width(width).round();
        let previous = self.widths.insert(column_key.to_string(), width);
        previous != Some(width)
    }

    // === Resize ===

    /// Begin a resize drag from the column's current width
    pub fn begin_resize(&mut self, column_key: &str, pointer_x: f32) -> bool {
        if self.position(column_key).is_none() {
            return false;
        }
        self.resize = Some(ResizeDrag {
            column_key: column_key.to_string(),
            start_width: self.width(column_key),
            start_x: pointer_x,
        });
        true
    }

    /// Width the active drag asks for at `pointer_x`, clamped to the bounds
    pub fn drag_width(&self, pointer_x: f32) -> Option<(String, f32)> {
        self.resize.as_ref().map(|drag| {
            let width = drag.start_width + (pointer_x - drag.start_x);
            (drag.column_key.clone(), self.clamp_width(width))
        })
    }

    pub fn end_resize(&mut self) -> Option<ResizeDrag> {
        self.resize.take()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    pub fn resize_drag(&self) -> Option<&ResizeDrag> {
        self.resize.as_ref()
    }

    // === Reorder ===

    pub fn begin_reorder(&mut self, column_key: &str) -> bool {
        if self.position(column_key).is_none() {
            return false;
        }
        self.reorder_source = Some(column_key.to_string());
        true
    }

    pub fn reorder_source(&self) -> Option<&str> {
        self.reorder_source.as_deref()
    }

    pub fn cancel_reorder(&mut self) {
        self.reorder_source = None;
    }

    /// Finish a header drag by dropping onto `target_key`
    pub fn drop_on(&mut self, target_key: &str) -> bool {
        match self.reorder_source.take() {
            Some(source) => self.reorder(&source, target_key),
            None => false,
        }
    }

    /// Move `source_key` to the position held by `target_key`
    ///
    /// The source is removed first and reinserted at the target's former
    /// index. No-op if the keys are equal or either is unknown.
    pub fn reorder(&mut self, source_key: &str, target_key: &str) -> bool {
        if source_key == target_key {
            return false;
        }
        let (Some(source), Some(target)) = (self.position(source_key), self.position(target_key))
        else {
            return false;
        };

        let moved = self.order.remove(source);
        self.order.insert(target, moved);
        tracing::debug!(source = source_key, target = target_key, order = ?self.order, "columns reordered");
        true
    }
}
