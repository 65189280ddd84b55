//! Selection expression parsing.

use thiserror::Error;

use super::format::format_range;
use super::range::{Bounds, Range};
use super::segment::Segment;

/// Errors produced while parsing a selection expression.
///
/// All variants are recoverable user-input errors: callers surface the
/// message and leave the previous selection untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("spreadsheet is not loaded or is empty")]
    GridNotReady,

    #[error("empty cell or range in selection list")]
    EmptySegment,

    #[error("invalid selection part: {0}. Use formats like A1, A1:C3, A, A:C, 1, 1:3")]
    Unrecognized(String),

    #[error("selection out of bounds: {}", format_range(.0))]
    OutOfBounds(Range),
}

/// Parse a comma-separated selection expression into validated rectangles.
///
/// Fails with [`SelectionError::GridNotReady`] before looking at any segment
/// when either bound is zero. The parse is all-or-nothing: the first error
/// aborts and no partial list is returned. Pure with respect to the grid;
/// applying the result is the caller's job.
pub fn parse_selection(text: &str, bounds: Bounds) -> Result<Vec<Range>, SelectionError> {
    if bounds.is_empty() {
        return Err(SelectionError::GridNotReady);
    }

    let mut ranges = Vec::new();
    for part in text.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(SelectionError::EmptySegment);
        }
        let segment =
            Segment::classify(part).ok_or_else(|| SelectionError::Unrecognized(part.to_string()))?;
        let range = segment.to_range(bounds);
        if !bounds.contains_range(&range) {
            return Err(SelectionError::OutOfBounds(range));
        }
        ranges.push(range);
    }
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds { rows: 10, cols: 5 };

    #[test]
    fn test_parse_rejects_unloaded_grid() {
        assert_eq!(
            parse_selection("A1", Bounds::new(0, 0)),
            Err(SelectionError::GridNotReady)
        );
        assert_eq!(
            parse_selection("A1", Bounds::new(10, 0)),
            Err(SelectionError::GridNotReady)
        );
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        assert_eq!(
            parse_selection("A1,,B2", BOUNDS),
            Err(SelectionError::EmptySegment)
        );
        assert_eq!(parse_selection("", BOUNDS), Err(SelectionError::EmptySegment));
        assert_eq!(
            parse_selection("A1,", BOUNDS),
            Err(SelectionError::EmptySegment)
        );
    }

    #[test]
    fn test_parse_rejects_unrecognized_segment() {
        assert_eq!(
            parse_selection("A1, what", BOUNDS),
            Err(SelectionError::Unrecognized("what".to_string()))
        );
    }

    #[test]
    fn test_parse_out_of_bounds() {
        assert_eq!(
            parse_selection("Z1", BOUNDS),
            Err(SelectionError::OutOfBounds(Range::new(0, 25, 0, 25)))
        );
        assert_eq!(
            parse_selection("A11", BOUNDS),
            Err(SelectionError::OutOfBounds(Range::new(10, 0, 10, 0)))
        );
    }

    #[test]
    fn test_parse_is_all_or_nothing() {
        // The first segment is valid on its own but the expression fails.
        let result = parse_selection("A1,Z1", BOUNDS);
        assert!(matches!(result, Err(SelectionError::OutOfBounds(_))));
    }

    #[test]
    fn test_parse_multiple_segments_in_order() {
        let ranges = parse_selection("B2, A1:C3, 4", BOUNDS).unwrap();
        assert_eq!(
            ranges,
            vec![
                Range::single(1, 1),
                Range::new(0, 0, 2, 2),
                Range::new(3, 0, 3, 4),
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SelectionError::Unrecognized("x!".to_string()).to_string(),
            "invalid selection part: x!. Use formats like A1, A1:C3, A, A:C, 1, 1:3"
        );
        assert_eq!(
            SelectionError::OutOfBounds(Range::new(0, 25, 0, 25)).to_string(),
            "selection out of bounds: Z1"
        );
    }
}
