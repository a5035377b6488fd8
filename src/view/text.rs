//! Plain-text rendering of a frame

use super::{CellRenderer, CellView, ColumnView, EmptyState, GridFrame, RowView};
use crate::data::DataType;

/// Pixel width one character stands for
const DEFAULT_CHAR_WIDTH: f32 = 8.0;

/// Truncate text with ellipsis if too long
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 1 {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('…');
        result
    }
}

/// Renders the header and row window as a text table
///
/// Each column gets `width / char_width` characters, two of which frame the
/// cell: `[..]` marks the focused cell, `{..}` the one being edited. Numbers
/// are right-aligned.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    char_width: f32,
    out: String,
    line: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_WIDTH)
    }
}

impl TextRenderer {
    pub fn new(char_width: f32) -> Self {
        Self {
            char_width: if char_width > 0.0 { char_width } else { DEFAULT_CHAR_WIDTH },
            out: String::new(),
            line: String::new(),
        }
    }

    /// Render `frame` and return the table
    pub fn render(mut self, frame: &GridFrame<'_>) -> String {
        frame.render(&mut self);
        self.finish()
    }

    pub fn finish(mut self) -> String {
        self.flush_line();
        self.out
    }

    fn chars_for(&self, width: f32) -> usize {
        ((width / self.char_width).floor() as usize).max(3)
    }

    fn push_cell(&mut self, text: &str, width: f32, right: bool, open: char, close: char) {
        let chars = self.chars_for(width);
        let inner = chars - 2;
        let text = truncate_text(text, inner);
        let pad = inner.saturating_sub(text.chars().count());

        if !self.line.is_empty() {
            self.line.push('|');
        }
        self.line.push(open);
        if right {
            self.line.extend(std::iter::repeat(' ').take(pad));
            self.line.push_str(&text);
        } else {
            self.line.push_str(&text);
            self.line.extend(std::iter::repeat(' ').take(pad));
        }
        self.line.push(close);
    }

    fn flush_line(&mut self) {
        if self.line.is_empty() {
            return;
        }
        self.out.push_str(self.line.trim_end());
        self.out.push('\n');
        self.line.clear();
    }
}

impl CellRenderer for TextRenderer {
    fn render_header(&mut self, column: &ColumnView<'_>, _col_index: usize) {
        let label = match column.sort {
            Some(sort) => format!("{} {}", column.name, sort.symbol()),
            None => column.name.to_string(),
        };
        self.push_cell(&label, column.width, false, ' ', ' ');
    }

    fn render_cell(&mut self, cell: &CellView<'_>) {
        if cell.col_index == 0 {
            self.flush_line();
        }
        let (open, close) = if cell.editing {
            ('{', '}')
        } else if cell.focused {
            ('[', ']')
        } else {
            (' ', ' ')
        };
        let right = cell.column.data_type == DataType::Number && !cell.editing;
        self.push_cell(&cell.text, cell.width, right, open, close);
    }

    fn end_row(&mut self, _row: &RowView<'_>) {
        self.flush_line();
    }

    fn render_empty(&mut self, state: EmptyState) {
        self.flush_line();
        match state {
            EmptyState::NoData => self.out.push_str("No data\n"),
            EmptyState::NoMatches { .. } => self.out.push_str("No matching rows\n"),
            EmptyState::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::GridConfig;
    use crate::data::{CellValue, Column, Dataset, RawRow};
    use crate::model::GridModel;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 6), "hello…");
        assert_eq!(truncate_text("hello", 1), "h");
    }

    #[test]
    fn test_renders_table() {
        let mut model = GridModel::with_clock(GridConfig::default(), Box::new(ManualClock::new()));
        let columns = vec![
            Column::new("name", DataType::Text).with_name("Name").with_width(80.0),
            Column::new("n", DataType::Number).with_name("N").with_width(64.0),
        ];
        let rows = vec![RawRow::from([
            ("name".to_string(), CellValue::text("Ann")),
            ("n".to_string(), CellValue::Number(1200.0)),
        ])];
        crate::update::load_dataset(&mut model, Dataset::new(columns, rows));
        model.refresh();

        let text = TextRenderer::default().render(&model.frame());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" Name ↕"));
        assert!(lines[1].starts_with(" Ann "));
        assert!(lines[1].ends_with("1,200"));
    }

    #[test]
    fn test_renders_empty_state() {
        let model = GridModel::with_clock(GridConfig::default(), Box::new(ManualClock::new()));
        let text = TextRenderer::default().render(&model.frame());
        assert_eq!(text, "No data\n");
    }
}
