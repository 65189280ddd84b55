//! Inline `#tag` reference scanning.
//!
//! Command text may embed cell references as `#`-prefixed tags
//! (`"sum #A1:A10 into #B1"`). This module extracts them, locates the tag a
//! cursor is in the middle of typing, and drives the preview highlight.

use std::sync::OnceLock;

use regex::Regex;

use gridtag_engine::selection::{Range, parse_selection};

use crate::provider::GridProvider;

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#([A-Za-z0-9:]+)").unwrap())
}

/// Extract `#tag` reference bodies from free-form text.
///
/// Matches are non-overlapping, left-to-right; bodies are returned without
/// the `#`, in order of appearance, duplicates preserved.
pub fn extract_tag_references(text: &str) -> Vec<String> {
    tag_regex()
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Parse the tags found in command text and apply them as a preview
/// highlight.
///
/// The text may be mid-typing and incomplete, so every failure is silent:
/// the provider is untouched and `None` is returned. This feed is never the
/// authoritative selection source.
pub fn preview_selection(
    provider: &mut dyn GridProvider,
    command_text: &str,
) -> Option<Vec<Range>> {
    let refs = extract_tag_references(command_text);
    if refs.is_empty() {
        return None;
    }
    let ranges = parse_selection(&refs.join(","), provider.bounds()).ok()?;
    provider.select_ranges(&ranges);
    Some(ranges)
}

/// An in-progress `#tag` under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagContext {
    /// Byte offset of the `#` in the text.
    pub tag_start: usize,
    /// Filter substring typed so far, between the `#` and the cursor.
    pub filter: String,
}

/// Find the `#` governing the cursor position, if any.
///
/// A `#` only opens a tag at the start of the text or after whitespace or a
/// `,`/`;`/`:` delimiter; one buried inside a word is skipped. The backward
/// scan stops at the first whitespace or delimiter. `cursor` is a byte
/// offset.
pub fn tag_context(text: &str, cursor: usize) -> Option<TagContext> {
    let cursor = cursor.min(text.len());
    let bytes = text.as_bytes();
    let mut i = cursor;
    while i > 0 {
        i -= 1;
        if bytes[i] == b'#' {
            if i == 0 || is_tag_boundary(bytes[i - 1]) {
                let filter = text.get(i + 1..cursor)?.trim().to_string();
                return Some(TagContext {
                    tag_start: i,
                    filter,
                });
            }
        } else if is_tag_boundary(bytes[i]) {
            return None;
        }
    }
    None
}

fn is_tag_boundary(b: u8) -> bool {
    b.is_ascii_whitespace() || matches!(b, b',' | b';' | b':')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::GridProvider;
    use crate::sheet::Sheet;

    #[test]
    fn test_extract_refs_in_order() {
        assert_eq!(
            extract_tag_references("move #A1 to #B2:C3 please"),
            vec!["A1", "B2:C3"]
        );
    }

    #[test]
    fn test_extract_preserves_duplicates() {
        assert_eq!(extract_tag_references("#A1 plus #A1"), vec!["A1", "A1"]);
    }

    #[test]
    fn test_extract_nothing() {
        assert!(extract_tag_references("no tags here").is_empty());
        assert!(extract_tag_references("lone # sign").is_empty());
    }

    #[test]
    fn test_extract_stops_at_non_reference_chars() {
        assert_eq!(extract_tag_references("#A1!"), vec!["A1"]);
        assert_eq!(extract_tag_references("(#a1:b2)"), vec!["a1:b2"]);
    }

    #[test]
    fn test_preview_applies_on_success() {
        let mut sheet = Sheet::from_rows(vec![vec![String::new(); 5]; 10]);
        let ranges = preview_selection(&mut sheet, "sum #A1:A3 into #B1").unwrap();
        assert_eq!(
            ranges,
            vec![Range::new(0, 0, 2, 0), Range::single(0, 1)]
        );
        assert_eq!(sheet.selected_ranges(), ranges);
    }

    #[test]
    fn test_preview_is_silent_on_failure() {
        let mut sheet = Sheet::from_rows(vec![vec![String::new(); 5]; 10]);
        sheet.select_ranges(&[Range::single(0, 0)]);

        // Out of bounds, mid-typing garbage, and no tags at all: the
        // existing selection survives every one.
        assert_eq!(preview_selection(&mut sheet, "#ZZ999"), None);
        assert_eq!(preview_selection(&mut sheet, "#A1:"), None);
        assert_eq!(preview_selection(&mut sheet, "nothing tagged"), None);
        assert_eq!(sheet.selected_ranges(), vec![Range::single(0, 0)]);
    }

    #[test]
    fn test_tag_context_at_cursor() {
        let text = "sum #A1 now";
        assert_eq!(
            tag_context(text, 7),
            Some(TagContext {
                tag_start: 4,
                filter: "A1".to_string()
            })
        );
        // Cursor right after the '#': empty filter.
        assert_eq!(
            tag_context(text, 5),
            Some(TagContext {
                tag_start: 4,
                filter: String::new()
            })
        );
    }

    #[test]
    fn test_tag_context_requires_boundary_before_hash() {
        assert_eq!(tag_context("item#3", 6), None);
        // After a delimiter is fine.
        assert!(tag_context("a,#B2", 5).is_some());
        assert!(tag_context("#B2", 3).is_some());
    }

    #[test]
    fn test_tag_context_stops_at_whitespace() {
        // The word under the cursor has no '#'.
        assert_eq!(tag_context("#A1 plain", 9), None);
    }
}
