//! Grid model: the single owner of all grid state
//!
//! Raw rows, column layout, filter/sort config, scroll state, edit and focus
//! state are mutated only through `update`. Derived state (the filtered and
//! sorted view, the rendered row window) is memoized on its inputs and
//! refreshed after every message, so readers always see one consistent
//! snapshot.

use crate::clock::{Clock, SystemClock};
use crate::config::GridConfig;
use crate::data::{Column, FilterState, Row, RowStore, SortState};
use crate::grid::{ColumnLayout, EditState, Focus, RowWindow, ViewExtent, Viewport};
use crate::keymap::Keymap;
use crate::memo::Memo;
use crate::schedule::{earliest_deadline, Debounce, Throttle};

/// Dependencies of the pipeline output
#[derive(Debug, Clone, PartialEq)]
struct ViewKey {
    rows_revision: u64,
    filters_generation: u64,
    sort: Option<SortState>,
}

/// Dependencies of the row window
#[derive(Debug, Clone, Copy, PartialEq)]
struct WindowKey {
    row_count: usize,
    scroll_offset: f32,
    viewport_height: f32,
}

pub struct GridModel {
    pub(crate) config: GridConfig,
    pub(crate) clock: Box<dyn Clock>,
    pub(crate) keymap: Keymap,

    /// Column descriptors as loaded, in load order
    pub(crate) columns: Vec<Column>,
    pub(crate) store: RowStore,
    pub(crate) layout: ColumnLayout,

    /// Live filter inputs, updated on every keystroke
    pub(crate) filters: FilterState,
    /// Debounced snapshot the pipeline runs on
    pub(crate) applied_filters: FilterState,
    pub(crate) filters_generation: u64,
    pub(crate) sort: Option<SortState>,

    pub(crate) viewport: Viewport,
    /// Whether the host has reported a measured height yet
    pub(crate) height_measured: bool,

    pub(crate) edit: EditState,
    pub(crate) focus: Focus,

    pub(crate) filter_debounce: Debounce<FilterState>,
    pub(crate) viewport_debounce: Debounce<f32>,
    pub(crate) scroll_throttle: Throttle<f32>,
    pub(crate) resize_throttle: Throttle<(String, f32)>,

    view: Memo<ViewKey, Vec<usize>>,
    window: Memo<WindowKey, RowWindow>,
}

impl std::fmt::Debug for GridModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridModel")
            .field("columns", &self.layout.order())
            .field("rows", &self.store.len())
            .field("view_rows", &self.view_len())
            .field("sort", &self.sort)
            .field("filters", &self.filters)
            .field("viewport", &self.viewport)
            .field("edit", &self.edit)
            .field("focus", &self.focus)
            .finish()
    }
}

impl GridModel {
    /// Create an empty grid driven by the system clock
    pub fn new(config: GridConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock::new()))
    }

    /// Create an empty grid driven by an injected clock
    pub fn with_clock(config: GridConfig, clock: Box<dyn Clock>) -> Self {
        let layout = ColumnLayout::new(
            config.min_column_width,
            config.max_column_width,
            config.default_column_width,
        );
        let keymap = config.keymap();

        let mut model = Self {
            keymap,
            layout,
            columns: Vec::new(),
            store: RowStore::new(),
            filters: FilterState::new(),
            applied_filters: FilterState::new(),
            filters_generation: 0,
            sort: None,
            viewport: Viewport::new(config.initial_viewport_height),
            height_measured: false,
            edit: EditState::default(),
            focus: Focus::default(),
            filter_debounce: Debounce::new(config.filter_debounce_ms),
            viewport_debounce: Debounce::new(config.viewport_debounce_ms),
            scroll_throttle: Throttle::new(config.scroll_throttle_ms),
            resize_throttle: Throttle::new(config.resize_throttle_ms),
            view: Memo::new(),
            window: Memo::new(),
            clock,
            config,
        };
        model.refresh();
        model
    }

    pub fn now(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// All column descriptors, in load order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Descriptors of the visible columns, in display order
    pub fn visible_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.layout.order().iter().filter_map(|key| self.column(key))
    }

    pub fn store(&self) -> &RowStore {
        &self.store
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// Live filter inputs
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Filter snapshot the current view was computed from
    pub fn applied_filters(&self) -> &FilterState {
        &self.applied_filters
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_resizing(&self) -> bool {
        self.layout.is_resizing()
    }

    // === Derived state ===

    /// View order: indices into the raw row store
    pub fn view_order(&self) -> &[usize] {
        self.view.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn view_len(&self) -> usize {
        self.view_order().len()
    }

    /// Row at a view position
    pub fn view_row(&self, view_index: usize) -> Option<&Row> {
        let raw = *self.view_order().get(view_index)?;
        self.store.get(raw)
    }

    /// View rows in order
    pub fn view_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.view_order().iter().filter_map(|&raw| self.store.get(raw))
    }

    /// Rendered slice of the view
    pub fn window(&self) -> RowWindow {
        self.window.get().copied().unwrap_or_default()
    }

    pub fn total_height(&self) -> f32 {
        self.view_len() as f32 * self.config.row_height
    }

    pub fn total_width(&self) -> f32 {
        self.layout.total_width()
    }

    /// Bounds the focused cell is clamped to
    pub fn extent(&self) -> ViewExtent {
        ViewExtent {
            rows: self.view_len(),
            cols: self.layout.len(),
            page_rows: self
                .viewport
                .rows_per_page(self.config.row_height, self.config.header_total()),
        }
    }

    /// How many times the pipeline has run
    pub fn pipeline_runs(&self) -> u64 {
        self.view.computations()
    }

    /// Earliest pending debounce/throttle deadline
    pub fn next_deadline(&self) -> Option<u64> {
        earliest_deadline([
            self.filter_debounce.deadline(),
            self.viewport_debounce.deadline(),
            self.scroll_throttle.deadline(),
            self.resize_throttle.deadline(),
        ])
    }

    /// Re-derive memoized state whose inputs changed
    ///
    /// Also drops a focus position the view no longer contains.
    pub fn refresh(&mut self) {
        let view_key = ViewKey {
            rows_revision: self.store.revision(),
            filters_generation: self.filters_generation,
            sort: self.sort.clone(),
        };
        let rows = self.store.rows();
        let filters = &self.applied_filters;
        let sort = self.sort.as_ref();
        let row_count = self
            .view
            .get_or_compute(view_key, || crate::data::run_pipeline(rows, filters, sort))
            .len();

        let window_key = WindowKey {
            row_count,
            scroll_offset: self.viewport.scroll_offset,
            viewport_height: self.viewport.height,
        };
        let (row_height, overscan, viewport) =
            (self.config.row_height, self.config.overscan_rows, self.viewport);
        let window = *self
            .window
            .get_or_compute(window_key, || viewport.window(row_count, row_height, overscan));
        tracing::trace!(start = window.start, end = window.end, row_count, "row window");

        if let Some(pos) = self.focus.position() {
            if !self.extent().contains(pos) {
                tracing::debug!(row = pos.row, col = pos.col, "focus left the view, clearing");
                self.focus.clear();
            }
        }
    }
}
