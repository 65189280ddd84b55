//! Classification of selection expression tokens.
//!
//! Each comma-delimited unit of a selection expression matches exactly one
//! grammar rule. The rules are mutually exclusive: a token with a colon is a
//! range whose two halves must be the same kind, and a token without one is a
//! cell, a bare column, or a bare row, distinguished by the presence of
//! digits.

use super::cell_ref::{CellRef, letters_to_col};
use super::range::{Bounds, Range};

/// One comma-delimited unit of a selection expression, classified by grammar
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// `A1`
    Cell(CellRef),
    /// `A1:C3` (corners in source order, possibly inverted)
    CellRange(CellRef, CellRef),
    /// `A`
    Column(usize),
    /// `A:C`
    ColumnRange(usize, usize),
    /// `5` (1-indexed in the source text, 0-indexed here)
    Row(usize),
    /// `1:5`
    RowRange(usize, usize),
}

/// One half of a range token, or a whole rangeless token.
enum Atom {
    Cell(CellRef),
    Column(usize),
    Row(usize),
}

impl Atom {
    fn classify(text: &str) -> Option<Atom> {
        if text.is_empty() {
            return None;
        }
        if text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return letters_to_col(text).map(Atom::Column);
        }
        if text.bytes().all(|b| b.is_ascii_digit()) {
            // Rows are 1-indexed; "0" and leading zeros are invalid.
            if text.starts_with('0') {
                return None;
            }
            let row = text.parse::<usize>().ok()?.checked_sub(1)?;
            return Some(Atom::Row(row));
        }
        CellRef::parse(text).map(Atom::Cell)
    }
}

impl Segment {
    /// Classify a trimmed token. Returns None when no grammar rule matches,
    /// including mixed ranges such as `A1:C` or `A:3`.
    pub fn classify(text: &str) -> Option<Segment> {
        match text.split_once(':') {
            Some((start, end)) => match (Atom::classify(start)?, Atom::classify(end)?) {
                (Atom::Cell(s), Atom::Cell(e)) => Some(Segment::CellRange(s, e)),
                (Atom::Column(s), Atom::Column(e)) => Some(Segment::ColumnRange(s, e)),
                (Atom::Row(s), Atom::Row(e)) => Some(Segment::RowRange(s, e)),
                _ => None,
            },
            None => Some(match Atom::classify(text)? {
                Atom::Cell(c) => Segment::Cell(c),
                Atom::Column(c) => Segment::Column(c),
                Atom::Row(r) => Segment::Row(r),
            }),
        }
    }

    /// Expand into a normalized rectangle against the given bounds.
    /// Column forms span every row; row forms span every column.
    pub fn to_range(self, bounds: Bounds) -> Range {
        let last_row = bounds.rows.saturating_sub(1);
        let last_col = bounds.cols.saturating_sub(1);
        match self {
            Segment::Cell(c) => Range::single(c.row, c.col),
            Segment::CellRange(s, e) => Range::new(s.row, s.col, e.row, e.col),
            Segment::Column(col) => Range::new(0, col, last_row, col),
            Segment::ColumnRange(a, b) => Range::new(0, a, last_row, b),
            Segment::Row(row) => Range::new(row, 0, row, last_col),
            Segment::RowRange(a, b) => Range::new(a, 0, b, last_col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_variant() {
        assert_eq!(
            Segment::classify("B2"),
            Some(Segment::Cell(CellRef::new(1, 1)))
        );
        assert_eq!(
            Segment::classify("A1:C3"),
            Some(Segment::CellRange(CellRef::new(0, 0), CellRef::new(2, 2)))
        );
        assert_eq!(Segment::classify("A"), Some(Segment::Column(0)));
        assert_eq!(Segment::classify("A:C"), Some(Segment::ColumnRange(0, 2)));
        assert_eq!(Segment::classify("5"), Some(Segment::Row(4)));
        assert_eq!(Segment::classify("1:5"), Some(Segment::RowRange(0, 4)));
    }

    #[test]
    fn test_classify_rejects_mixed_ranges() {
        assert_eq!(Segment::classify("A1:C"), None);
        assert_eq!(Segment::classify("A:3"), None);
        assert_eq!(Segment::classify("1:B2"), None);
    }

    #[test]
    fn test_classify_rejects_malformed_tokens() {
        assert_eq!(Segment::classify(""), None);
        assert_eq!(Segment::classify("A0"), None);
        assert_eq!(Segment::classify("0"), None);
        assert_eq!(Segment::classify("05"), None);
        assert_eq!(Segment::classify("1A"), None);
        assert_eq!(Segment::classify("A1:B2:C3"), None);
        assert_eq!(Segment::classify("A1 B2"), None);
    }

    #[test]
    fn test_to_range_expands_column_and_row_forms() {
        let bounds = Bounds::new(10, 5);
        assert_eq!(
            Segment::Column(2).to_range(bounds),
            Range::new(0, 2, 9, 2)
        );
        assert_eq!(
            Segment::RowRange(0, 2).to_range(bounds),
            Range::new(0, 0, 2, 4)
        );
    }

    #[test]
    fn test_to_range_normalizes_inverted_corners() {
        let bounds = Bounds::new(10, 5);
        let seg = Segment::classify("C3:A1").unwrap();
        assert_eq!(seg.to_range(bounds), Range::new(0, 0, 2, 2));

        let seg = Segment::classify("C:A").unwrap();
        assert_eq!(seg.to_range(bounds), Range::new(0, 0, 9, 2));

        let seg = Segment::classify("5:1").unwrap();
        assert_eq!(seg.to_range(bounds), Range::new(0, 0, 4, 4));
    }
}
