//! Ranked autocomplete suggestions for `#tag` references.
//!
//! The ordering is deterministic for a given grid state and filter string:
//! candidates are generated in a fixed sequence, optionally narrowed by a
//! substring filter, and capped.

use gridtag_engine::selection::{col_to_letters, letters_to_col};

use crate::provider::GridProvider;

/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 10;
/// Cells scanned in the filtered column on the column-priority path.
const COLUMN_SCAN_ROWS: usize = 20;
/// Cells scanned on the global path before giving up.
const GLOBAL_SCAN_CELLS: usize = 1000;
/// Cell value preview length, in characters.
const PREVIEW_LEN: usize = 15;

/// What a suggestion refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Cell,
    Column,
    Row,
    Range,
}

/// One autocomplete candidate for the tag popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Reference text inserted on accept (e.g. "B2" or "A:C").
    pub text: String,
    pub kind: SuggestionKind,
    /// Human-readable description shown beside the text.
    pub detail: String,
}

/// Generate up to [`MAX_SUGGESTIONS`] candidates for an in-progress filter.
///
/// A single-letter filter naming an in-bounds column prioritizes that
/// column's cells over a global scan; any other filter narrows the global
/// candidate list by case-insensitive substring match on text and detail.
pub fn suggest(provider: &dyn GridProvider, filter: &str) -> Vec<Suggestion> {
    let bounds = provider.bounds();
    if bounds.is_empty() {
        return Vec::new();
    }

    let column_filter = single_column_filter(filter, bounds.cols);

    let mut suggestions = match column_filter {
        Some(col) => column_priority_suggestions(provider, col),
        None => global_suggestions(provider),
    };

    if !filter.is_empty() && column_filter.is_none() {
        let needle = filter.to_lowercase();
        suggestions.retain(|s| {
            s.text.to_lowercase().contains(&needle) || s.detail.to_lowercase().contains(&needle)
        });
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn single_column_filter(filter: &str, cols: usize) -> Option<usize> {
    if filter.len() != 1 {
        return None;
    }
    letters_to_col(filter).filter(|&col| col < cols)
}

/// The filter names one column: its header, its leading cells, its
/// whole-column range, then a taste of the other columns.
fn column_priority_suggestions(provider: &dyn GridProvider, col: usize) -> Vec<Suggestion> {
    let bounds = provider.bounds();
    let letter = col_to_letters(col);
    let mut out = vec![column_suggestion(&letter)];

    for row in 0..bounds.rows.min(COLUMN_SCAN_ROWS) {
        out.push(cell_suggestion(provider, row, col));
    }

    out.push(Suggestion {
        text: format!("{letter}1:{letter}{}", bounds.rows),
        kind: SuggestionKind::Range,
        detail: format!("All rows in column {letter}"),
    });

    for other in 0..bounds.cols {
        if other == col {
            continue;
        }
        out.push(column_suggestion(&col_to_letters(other)));
        out.push(cell_suggestion(provider, 0, other));
    }

    out
}

/// No column focus: every column header and row number, a bounded
/// column-major cell scan, and the example range patterns.
fn global_suggestions(provider: &dyn GridProvider) -> Vec<Suggestion> {
    let bounds = provider.bounds();
    let mut out = Vec::new();

    for col in 0..bounds.cols {
        out.push(column_suggestion(&col_to_letters(col)));
    }
    for row in 0..bounds.rows {
        out.push(Suggestion {
            text: (row + 1).to_string(),
            kind: SuggestionKind::Row,
            detail: format!("Row {}", row + 1),
        });
    }

    let mut scanned = 0;
    'columns: for col in 0..bounds.cols {
        for row in 0..bounds.rows {
            if scanned >= GLOBAL_SCAN_CELLS {
                break 'columns;
            }
            out.push(cell_suggestion(provider, row, col));
            scanned += 1;
        }
    }

    for (text, detail) in [
        ("A1:A10", "Range example: A1 to A10"),
        ("A:C", "Column range: A to C"),
        ("1:5", "Row range: 1 to 5"),
    ] {
        out.push(Suggestion {
            text: text.to_string(),
            kind: SuggestionKind::Range,
            detail: detail.to_string(),
        });
    }

    out
}

fn column_suggestion(letter: &str) -> Suggestion {
    Suggestion {
        text: letter.to_string(),
        kind: SuggestionKind::Column,
        detail: format!("Column {letter}"),
    }
}

fn cell_suggestion(provider: &dyn GridProvider, row: usize, col: usize) -> Suggestion {
    let id = format!("{}{}", col_to_letters(col), row + 1);
    let detail = match provider.cell_value(row, col) {
        Some(value) if !value.is_empty() => format!("Cell {}: {}", id, preview(&value)),
        _ => format!("Cell {}", id),
    };
    Suggestion {
        text: id,
        kind: SuggestionKind::Cell,
        detail,
    }
}

fn preview(value: &str) -> String {
    let mut chars = value.chars();
    let head: String = chars.by_ref().take(PREVIEW_LEN).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Sheet;

    fn sheet() -> Sheet {
        // 4 rows x 3 cols with recognizable values.
        Sheet::from_rows(vec![
            vec!["name".into(), "qty".into(), "price".into()],
            vec!["apple".into(), "3".into(), "1.20".into()],
            vec!["banana".into(), "5".into(), "0.50".into()],
            vec!["a very long cell value indeed".into(), "".into(), "9".into()],
        ])
    }

    #[test]
    fn test_empty_grid_yields_nothing() {
        assert!(suggest(&Sheet::new(), "").is_empty());
    }

    #[test]
    fn test_unfiltered_lists_columns_first_and_caps() {
        let out = suggest(&sheet(), "");
        assert_eq!(out.len(), MAX_SUGGESTIONS);
        assert_eq!(out[0].text, "A");
        assert_eq!(out[0].kind, SuggestionKind::Column);
        assert_eq!(out[1].text, "B");
        assert_eq!(out[2].text, "C");
        assert_eq!(out[3].text, "1");
        assert_eq!(out[3].kind, SuggestionKind::Row);
    }

    #[test]
    fn test_column_filter_prioritizes_that_column() {
        let out = suggest(&sheet(), "B");
        assert_eq!(out[0].text, "B");
        assert_eq!(out[0].kind, SuggestionKind::Column);
        assert_eq!(out[1].text, "B1");
        assert_eq!(out[1].detail, "Cell B1: qty");
        assert_eq!(out[2].text, "B2");
        // The empty B4 cell has no value preview.
        assert_eq!(out[4].detail, "Cell B4");
        assert_eq!(out[5].text, "B1:B4");
        assert_eq!(out[5].kind, SuggestionKind::Range);
    }

    #[test]
    fn test_column_filter_is_case_insensitive() {
        assert_eq!(suggest(&sheet(), "b")[0].text, "B");
    }

    #[test]
    fn test_out_of_bounds_column_letter_falls_back_to_substring() {
        // "Z" names no column in a 3-column sheet.
        let out = suggest(&sheet(), "Z");
        assert!(out.iter().all(|s| {
            s.text.to_lowercase().contains('z') || s.detail.to_lowercase().contains('z')
        }));
    }

    #[test]
    fn test_substring_filter_matches_cell_values() {
        let out = suggest(&sheet(), "banana");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "A3");
        assert_eq!(out[0].detail, "Cell A3: banana");
    }

    #[test]
    fn test_long_values_are_truncated() {
        let out = suggest(&sheet(), "A4");
        assert_eq!(out[0].detail, "Cell A4: a very long cel...");
    }

    #[test]
    fn test_deterministic_for_same_inputs() {
        assert_eq!(suggest(&sheet(), "a"), suggest(&sheet(), "a"));
    }
}
