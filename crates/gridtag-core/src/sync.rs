//! Selection synchronization between a textual selector and a grid provider.

use gridtag_engine::selection::{
    EMPTY_SELECTION, Range, SelectionError, format_selection, parse_selection,
};

use crate::provider::GridProvider;

/// Parse a selector expression and apply it to the provider.
///
/// All-or-nothing: on any parse error the provider's selection is left
/// untouched. Empty or whitespace-only input clears the selection, matching
/// an emptied selector field.
pub fn apply_selection(
    provider: &mut dyn GridProvider,
    text: &str,
) -> Result<Vec<Range>, SelectionError> {
    if text.trim().is_empty() {
        provider.select_ranges(&[]);
        return Ok(Vec::new());
    }
    let ranges = parse_selection(text, provider.bounds())?;
    provider.select_ranges(&ranges);
    Ok(ranges)
}

/// Format the provider's current selection for display.
///
/// A selection can go stale when the grid shrinks underneath it, so
/// rectangles starting beyond the grid are dropped and overhanging ends are
/// clamped before formatting.
pub fn display_selection(provider: &dyn GridProvider) -> String {
    let bounds = provider.bounds();
    if bounds.is_empty() {
        return EMPTY_SELECTION.to_string();
    }
    let clamped: Vec<Range> = provider
        .selected_ranges()
        .into_iter()
        .filter(|r| r.start_row < bounds.rows && r.start_col < bounds.cols)
        .map(|r| {
            Range::new(
                r.start_row,
                r.start_col,
                r.end_row.min(bounds.rows - 1),
                r.end_col.min(bounds.cols - 1),
            )
        })
        .collect();
    format_selection(&clamped, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Sheet;

    fn sheet(rows: usize, cols: usize) -> Sheet {
        Sheet::from_rows(vec![vec![String::from("x"); cols]; rows])
    }

    #[test]
    fn test_apply_selects_on_success() {
        let mut sheet = sheet(10, 5);
        let ranges = apply_selection(&mut sheet, "A1:C3, E5").unwrap();
        assert_eq!(
            ranges,
            vec![Range::new(0, 0, 2, 2), Range::single(4, 4)]
        );
        assert_eq!(sheet.selected_ranges(), ranges);
    }

    #[test]
    fn test_apply_leaves_selection_on_failure() {
        let mut sheet = sheet(10, 5);
        apply_selection(&mut sheet, "B2").unwrap();

        let err = apply_selection(&mut sheet, "A1,Z99").unwrap_err();
        assert!(matches!(err, SelectionError::OutOfBounds(_)));
        assert_eq!(sheet.selected_ranges(), vec![Range::single(1, 1)]);
    }

    #[test]
    fn test_apply_empty_input_clears() {
        let mut sheet = sheet(10, 5);
        apply_selection(&mut sheet, "B2").unwrap();
        assert_eq!(apply_selection(&mut sheet, "   ").unwrap(), vec![]);
        assert!(sheet.selected_ranges().is_empty());
    }

    #[test]
    fn test_display_formats_current_selection() {
        let mut sheet = sheet(10, 5);
        apply_selection(&mut sheet, "C3:A1, 2").unwrap();
        assert_eq!(display_selection(&sheet), "A1:C3, 2");
    }

    #[test]
    fn test_display_placeholder_when_nothing_selected() {
        let sheet = sheet(10, 5);
        assert_eq!(display_selection(&sheet), "-");
        assert_eq!(display_selection(&Sheet::new()), "-");
    }

    #[test]
    fn test_display_clamps_stale_selection() {
        let mut small = sheet(3, 3);
        // A selection taken on a larger grid, now stale.
        small.select_ranges(&[Range::new(1, 1, 8, 8), Range::single(5, 0)]);
        // The overhanging range clamps; the out-of-grid one is dropped.
        assert_eq!(display_selection(&small), "B2:C3");
    }
}
