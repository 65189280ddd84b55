//! Selection formatting: rectangles back to the shortest textual form.

use super::cell_ref::col_to_letters;
use super::range::{Bounds, Range};

/// Placeholder shown when nothing is selected.
pub const EMPTY_SELECTION: &str = "-";

/// Render a rectangle in plain cell or cell-range form (`B2`, `B2:D5`),
/// without full-row/full-column collapsing.
pub fn format_range(range: &Range) -> String {
    let start = format!("{}{}", col_to_letters(range.start_col), range.start_row + 1);
    if range.is_single() {
        start
    } else {
        format!(
            "{}:{}{}",
            start,
            col_to_letters(range.end_col),
            range.end_row + 1
        )
    }
}

/// Format a selection as the shortest equivalent expression.
///
/// Per rectangle, a full-height span collapses to column notation (`A`,
/// `A:C`), otherwise a full-width span collapses to row notation (`3`,
/// `2:5`), otherwise plain cell or cell-range form. Tokens are joined with
/// `", "` in input order, which reflects multi-select order. An empty list,
/// or bounds with a zero dimension, yields `"-"`.
///
/// Total over well-formed rectangles: callers clamp or drop rectangles left
/// stale by a shrunk grid before formatting.
pub fn format_selection(ranges: &[Range], bounds: Bounds) -> String {
    if ranges.is_empty() || bounds.is_empty() {
        return EMPTY_SELECTION.to_string();
    }

    ranges
        .iter()
        .map(|range| {
            let full_height = range.start_row == 0 && range.end_row == bounds.rows - 1;
            let full_width = range.start_col == 0 && range.end_col == bounds.cols - 1;

            if full_height {
                if range.start_col == range.end_col {
                    col_to_letters(range.start_col)
                } else {
                    format!(
                        "{}:{}",
                        col_to_letters(range.start_col),
                        col_to_letters(range.end_col)
                    )
                }
            } else if full_width {
                if range.start_row == range.end_row {
                    format!("{}", range.start_row + 1)
                } else {
                    format!("{}:{}", range.start_row + 1, range.end_row + 1)
                }
            } else {
                format_range(range)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds { rows: 10, cols: 5 };

    #[test]
    fn test_format_empty_is_placeholder() {
        assert_eq!(format_selection(&[], BOUNDS), "-");
        assert_eq!(
            format_selection(&[Range::single(0, 0)], Bounds::new(0, 0)),
            "-"
        );
    }

    #[test]
    fn test_format_cell_and_cell_range() {
        assert_eq!(format_selection(&[Range::single(0, 0)], BOUNDS), "A1");
        assert_eq!(format_selection(&[Range::new(1, 1, 4, 3)], BOUNDS), "B2:D5");
    }

    #[test]
    fn test_format_collapses_full_height_to_columns() {
        assert_eq!(format_selection(&[Range::new(0, 0, 9, 2)], BOUNDS), "A:C");
        assert_eq!(format_selection(&[Range::new(0, 3, 9, 3)], BOUNDS), "D");
    }

    #[test]
    fn test_format_collapses_full_width_to_rows() {
        assert_eq!(format_selection(&[Range::new(2, 0, 2, 4)], BOUNDS), "3");
        assert_eq!(format_selection(&[Range::new(1, 0, 4, 4)], BOUNDS), "2:5");
    }

    #[test]
    fn test_full_sheet_prefers_column_notation() {
        // A rectangle spanning everything satisfies both collapse rules;
        // the full-height rule wins.
        assert_eq!(format_selection(&[Range::new(0, 0, 9, 4)], BOUNDS), "A:E");
        assert_eq!(
            format_selection(&[Range::new(0, 0, 9, 0)], Bounds::new(10, 1)),
            "A"
        );
    }

    #[test]
    fn test_format_preserves_input_order() {
        let first = Range::new(4, 1, 4, 1);
        let second = Range::single(0, 0);
        assert_eq!(format_selection(&[first, second], BOUNDS), "B5, A1");
    }
}
