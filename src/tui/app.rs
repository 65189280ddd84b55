//! Application state and logic.
//!
//! This module contains the main [`App`] struct which holds the sheet, the
//! focused pane, the selector and command buffers, and the `#tag`
//! autocomplete popup state. Keyboard input goes to exactly one pane at a
//! time, tracked by [`Focus`].

use std::path::PathBuf;

use gridtag_core::error::Result;
use gridtag_core::provider::GridProvider;
use gridtag_core::suggest::{Suggestion, suggest};
use gridtag_core::sync::{apply_selection, display_selection};
use gridtag_core::tagger::{preview_selection, tag_context};
use gridtag_core::{Range, Sheet};

/// Which pane owns keyboard input.
///
/// - [`Grid`](Focus::Grid): navigate cells, single-key commands
/// - [`Selector`](Focus::Selector): edit the selection expression
/// - [`Command`](Focus::Command): type free text with `#tag` autocomplete
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Selector,
    Command,
}

/// Main application state container.
pub struct App {
    /// The sheet backing the grid view
    pub sheet: Sheet,
    /// Which pane owns keyboard input
    pub focus: Focus,
    /// Current cursor position (row)
    pub cursor_row: usize,
    /// Current cursor position (column)
    pub cursor_col: usize,
    /// Anchor for shift-extended selections
    pub anchor: Option<(usize, usize)>,
    /// Viewport offset (row)
    pub viewport_row: usize,
    /// Viewport offset (column)
    pub viewport_col: usize,
    /// Number of visible rows
    pub visible_rows: usize,
    /// Number of visible columns
    pub visible_cols: usize,
    /// Selector field buffer
    pub selector_buffer: String,
    /// Cursor position within the selector buffer (byte offset)
    pub selector_cursor: usize,
    /// Command field buffer
    pub command_buffer: String,
    /// Cursor position within the command buffer (byte offset)
    pub command_cursor: usize,
    /// Autocomplete popup entries (empty when closed)
    pub popup: Vec<Suggestion>,
    /// Highlighted popup entry
    pub popup_index: Option<usize>,
    /// Status message to display
    pub status_message: String,
    /// Source file, shown in the status bar
    pub file_path: Option<PathBuf>,
    /// Column width for display
    pub col_width: usize,
    /// Quit flag
    pub should_quit: bool,
}

impl App {
    /// Create a new application with an empty sheet.
    pub fn new() -> Self {
        App {
            sheet: Sheet::new(),
            focus: Focus::Grid,
            cursor_row: 0,
            cursor_col: 0,
            anchor: None,
            viewport_row: 0,
            viewport_col: 0,
            visible_rows: 20,
            visible_cols: 8,
            selector_buffer: String::from("-"),
            selector_cursor: 1,
            command_buffer: String::new(),
            command_cursor: 0,
            popup: Vec::new(),
            popup_index: None,
            status_message: String::new(),
            file_path: None,
            col_width: 12,
            should_quit: false,
        }
    }

    /// Create a new application and load a CSV file if provided.
    pub fn with_file(path: Option<PathBuf>) -> Result<Self> {
        let mut app = Self::new();
        if let Some(ref p) = path {
            app.sheet = Sheet::from_csv_path(p)?;
            app.file_path = Some(p.clone());
        } else {
            app.status_message = String::from("No file loaded; selections need a grid");
        }
        Ok(app)
    }

    /// Mirror the sheet's selection into the selector field.
    pub fn refresh_selector(&mut self) {
        self.selector_buffer = display_selection(&self.sheet);
        self.selector_cursor = self.selector_buffer.len();
    }

    /// Move the grid cursor, collapsing the selection to the cursor cell.
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let bounds = self.sheet.bounds();
        if bounds.is_empty() {
            return;
        }
        self.cursor_row = clamp_add(self.cursor_row, d_row, bounds.rows - 1);
        self.cursor_col = clamp_add(self.cursor_col, d_col, bounds.cols - 1);
        self.anchor = None;
        self.sheet
            .select_ranges(&[Range::single(self.cursor_row, self.cursor_col)]);
        self.refresh_selector();
        self.update_viewport();
    }

    /// Move the grid cursor, extending the selection from the anchor.
    pub fn extend_cursor(&mut self, d_row: isize, d_col: isize) {
        let bounds = self.sheet.bounds();
        if bounds.is_empty() {
            return;
        }
        let anchor = *self
            .anchor
            .get_or_insert((self.cursor_row, self.cursor_col));
        self.cursor_row = clamp_add(self.cursor_row, d_row, bounds.rows - 1);
        self.cursor_col = clamp_add(self.cursor_col, d_col, bounds.cols - 1);
        self.sheet.select_ranges(&[Range::new(
            anchor.0,
            anchor.1,
            self.cursor_row,
            self.cursor_col,
        )]);
        self.refresh_selector();
        self.update_viewport();
    }

    /// Apply the selector field to the sheet.
    ///
    /// On success the cursor jumps to the first rectangle and focus should
    /// return to the grid; on failure the previous selection survives and
    /// the field is restored to its canonical form.
    pub fn apply_selector_input(&mut self) -> bool {
        match apply_selection(&mut self.sheet, &self.selector_buffer) {
            Ok(ranges) => {
                if let Some(first) = ranges.first() {
                    self.cursor_row = first.start_row;
                    self.cursor_col = first.start_col;
                    self.status_message = format!("Selected {}", display_selection(&self.sheet));
                } else {
                    self.status_message = String::from("Selection cleared");
                }
                self.anchor = None;
                self.refresh_selector();
                self.update_viewport();
                true
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
                self.refresh_selector();
                false
            }
        }
    }

    /// Clear the selection and the selector field.
    pub fn clear_selection(&mut self) {
        self.sheet.clear_selection();
        self.anchor = None;
        self.refresh_selector();
        self.status_message = String::from("Selection cleared");
    }

    /// Regenerate the popup from the tag under the command cursor.
    pub fn update_popup(&mut self) {
        match tag_context(&self.command_buffer, self.command_cursor) {
            Some(ctx) => {
                self.popup = suggest(&self.sheet, &ctx.filter);
                self.popup_index = None;
            }
            None => self.close_popup(),
        }
    }

    pub fn close_popup(&mut self) {
        self.popup.clear();
        self.popup_index = None;
    }

    /// Step the popup highlight, wrapping at either end.
    pub fn popup_move(&mut self, delta: isize) {
        if self.popup.is_empty() {
            return;
        }
        let len = self.popup.len() as isize;
        let next = match self.popup_index {
            Some(i) => (i as isize + delta).rem_euclid(len),
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.popup_index = Some(next as usize);
    }

    /// Insert the chosen (or pending) reference at the tag position and
    /// preview it.
    pub fn accept_suggestion(&mut self) {
        let Some(ctx) = tag_context(&self.command_buffer, self.command_cursor) else {
            return;
        };
        let value = match self.popup_index.and_then(|i| self.popup.get(i)) {
            Some(suggestion) => suggestion.text.clone(),
            // Nothing highlighted: keep what the user already typed, so
            // "#A1" followed by Enter works directly.
            None if !ctx.filter.is_empty() => ctx.filter.clone(),
            None => return,
        };

        let before = &self.command_buffer[..ctx.tag_start];
        let after = &self.command_buffer[self.command_cursor..];
        self.command_buffer = format!("{}#{}{}", before, value, after);
        self.command_cursor = ctx.tag_start + 1 + value.len();

        // Preview highlight only; failures stay silent while typing.
        if preview_selection(&mut self.sheet, &format!("#{}", value)).is_some() {
            self.refresh_selector();
        }
        self.close_popup();
    }

    /// Scan the whole command for tags and preview them.
    pub fn preview_command_tags(&mut self) {
        match preview_selection(&mut self.sheet, &self.command_buffer) {
            Some(_) => {
                self.refresh_selector();
                self.status_message = format!("Highlighted {}", display_selection(&self.sheet));
            }
            None => {
                self.status_message = String::from("No cell tags in command");
            }
        }
    }

    /// Keep the cursor inside the visible viewport.
    pub fn update_viewport(&mut self) {
        if self.cursor_row < self.viewport_row {
            self.viewport_row = self.cursor_row;
        } else if self.cursor_row >= self.viewport_row + self.visible_rows {
            self.viewport_row = self.cursor_row + 1 - self.visible_rows;
        }
        if self.cursor_col < self.viewport_col {
            self.viewport_col = self.cursor_col;
        } else if self.cursor_col >= self.viewport_col + self.visible_cols {
            self.viewport_col = self.cursor_col + 1 - self.visible_cols;
        }
    }

    /// Copy the selected cells to the system clipboard.
    pub fn yank(&mut self) {
        self.status_message = super::clipboard::yank_selection(&self.sheet);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_add(value: usize, delta: isize, max: usize) -> usize {
    (value as isize + delta).clamp(0, max as isize) as usize
}
