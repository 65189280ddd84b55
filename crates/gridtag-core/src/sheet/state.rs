//! Sheet state: cell text plus the current selection.

use std::path::Path;

use gridtag_engine::selection::{Bounds, Range};

use crate::error::Result;
use crate::provider::GridProvider;

/// An in-memory rectangular sheet of cell text with a multi-range selection.
///
/// This is the default [`GridProvider`] backing the TUI and the CLI; real
/// deployments sit the engine on top of an actual grid widget instead.
#[derive(Debug, Default, Clone)]
pub struct Sheet {
    /// Cell text, row-major; rows are padded to equal width.
    cells: Vec<Vec<String>>,
    /// Current selection, in multi-select order.
    selection: Vec<Range>,
}

impl Sheet {
    /// Create an empty sheet: bounds are `(0, 0)` until data is loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from rows of cell text, padding ragged rows to the
    /// widest one.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = rows;
        for row in &mut cells {
            row.resize(width, String::new());
        }
        Sheet {
            cells,
            selection: Vec::new(),
        }
    }

    /// Load a sheet from a CSV file.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        super::io::load_csv(path)
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Clear the current selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Check if a cell is inside the current selection.
    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.selection.iter().any(|r| r.contains(row, col))
    }
}

impl GridProvider for Sheet {
    fn bounds(&self) -> Bounds {
        Bounds::new(self.rows(), self.cols())
    }

    fn select_ranges(&mut self, ranges: &[Range]) {
        self.selection = ranges.to_vec();
    }

    fn selected_ranges(&self) -> Vec<Range> {
        self.selection.clone()
    }

    fn cell_value(&self, row: usize, col: usize) -> Option<String> {
        let value = self.cells.get(row)?.get(col)?;
        if value.is_empty() {
            None
        } else {
            Some(value.clone())
        }
    }
}
