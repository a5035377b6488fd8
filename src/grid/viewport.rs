//! Viewport windowing
//!
//! Maps a scroll offset and viewport height to the contiguous slice of view
//! rows that must be materialized, plus overscan on both sides.

use std::ops::Range;

use serde::Serialize;

/// Half-open range of view-row indices to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RowWindow {
    pub start: usize,
    pub end: usize,
}

impl RowWindow {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Rows to render for `row_count` rows of `row_height` pixels
///
/// `first = floor(S / H)`, `count = ceil(V / H)`; the window is
/// `[first - overscan, first + count + overscan]` clipped to the rows that
/// exist. Its size never depends on `row_count`.
pub fn compute_window(
    row_count: usize,
    row_height: f32,
    scroll_offset: f32,
    viewport_height: f32,
    overscan: usize,
) -> RowWindow {
    if row_count == 0 || !(row_height > 0.0) {
        return RowWindow::empty();
    }

    let scroll = scroll_offset.max(0.0);
    let first = (scroll / row_height).floor() as usize;
    let count = (viewport_height.max(0.0) / row_height).ceil() as usize;

    let start = first.saturating_sub(overscan);
    let last = (row_count - 1).min(first.saturating_add(count).saturating_add(overscan));

    if start > last {
        RowWindow::empty()
    } else {
        RowWindow { start, end: last + 1 }
    }
}

/// Smallest scroll change that brings row `row_index` fully into view
///
/// `header_height` is the sticky header area covering the top of the
/// viewport (column headers plus the filter row).
pub fn scroll_into_view(
    row_index: usize,
    row_height: f32,
    scroll_offset: f32,
    viewport_height: f32,
    header_height: f32,
) -> f32 {
    let top = row_index as f32 * row_height;
    let bottom = top + row_height;
    let body = viewport_height - header_height;

    let target = if top < scroll_offset {
        top
    } else if bottom > scroll_offset + body {
        bottom - body
    } else {
        scroll_offset
    };

    target.max(0.0)
}

/// Scroll position and measured height of the grid's scroll container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_offset: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(height: f32) -> Self {
        Self {
            scroll_offset: 0.0,
            height: height.max(0.0),
        }
    }

    /// Set the scroll offset (never negative); returns true if it changed
    pub fn set_scroll_offset(&mut self, offset: f32) -> bool {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        let changed = offset != self.scroll_offset;
        self.scroll_offset = offset;
        changed
    }

    pub fn set_height(&mut self, height: f32) -> bool {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        let changed = height != self.height;
        self.height = height;
        changed
    }

    pub fn window(&self, row_count: usize, row_height: f32, overscan: usize) -> RowWindow {
        compute_window(row_count, row_height, self.scroll_offset, self.height, overscan)
    }

    /// Adjust the scroll offset so a row is visible; returns true if it moved
    pub fn ensure_row_visible(&mut self, row_index: usize, row_height: f32, header_height: f32) -> bool {
        let target = scroll_into_view(
            row_index,
            row_height,
            self.scroll_offset,
            self.height,
            header_height,
        );
        self.set_scroll_offset(target)
    }

    /// Rows a PageUp/PageDown moves by (at least one)
    pub fn rows_per_page(&self, row_height: f32, header_height: f32) -> usize {
        if !(row_height > 0.0) {
            return 1;
        }
        (((self.height - header_height) / row_height).floor().max(1.0)) as usize
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(500.0)
    }
}
