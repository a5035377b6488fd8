//! Grid-side state: column layout, viewport windowing, edit and focus

pub mod columns;
pub mod edit;
pub mod focus;
pub mod viewport;

pub use columns::{ColumnLayout, ResizeDrag};
pub use edit::{coerce_input, EditState, EditTarget};
pub use focus::{navigate, CellPosition, Focus, ViewExtent};
pub use viewport::{compute_window, scroll_into_view, RowWindow, Viewport};
