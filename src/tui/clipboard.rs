//! Clipboard yank for the current selection.

use gridtag_core::Sheet;
use gridtag_core::provider::GridProvider;

/// Copy the selected cells to the system clipboard as tab-separated text,
/// one block per rectangle. Returns a status line describing the result.
pub fn yank_selection(sheet: &Sheet) -> String {
    let ranges = sheet.selected_ranges();
    if ranges.is_empty() {
        return String::from("Nothing selected");
    }

    let mut blocks = Vec::new();
    let mut cell_count = 0;
    for range in &ranges {
        let mut lines = Vec::new();
        for row in range.start_row..=range.end_row {
            let mut fields = Vec::new();
            for col in range.start_col..=range.end_col {
                fields.push(sheet.cell_value(row, col).unwrap_or_default());
            }
            lines.push(fields.join("\t"));
        }
        cell_count += range.cell_count();
        blocks.push(lines.join("\n"));
    }

    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(blocks.join("\n")))
    {
        Ok(()) => format!("Yanked {} cell(s)", cell_count),
        Err(e) => format!("Clipboard error: {}", e),
    }
}
