//! Path parsing
//!
//! Paths address nodes inside a [`Tree`](crate::Tree) using dot-separated
//! keys and bracketed array indices.
//!
//! # Path Syntax
//!
//! - Dot-separated keys: `database.main.host`
//! - Array indexing: `servers[0].host`
//! - Multi-dimensional indexing: `matrix[0][1]`
//!
//! Index text is kept verbatim by the parser and only validated when a
//! traversal reaches it, so parsing never fails.
//!
//! Malformed input is handled as follows:
//!
//! - empty key tokens (`a..b`, `.a`, `a.`) are skipped
//! - an unterminated bracket (`a[1`) is closed at the end of the string
//! - text directly after `]` starts a new key (`a[0]b` is `a[0].b`)
//! - bracket contents are not trimmed, so `a[ 1]` carries the index `" 1"`
//!
//! # Examples
//!
//! ```
//! use layercfg_tree::path::{parse_path, Segment};
//!
//! let path = parse_path("servers[0].host");
//! assert_eq!(path, vec![
//!     Segment::key("servers"),
//!     Segment::index("0"),
//!     Segment::key("host").into_leaf(),
//! ]);
//! ```

use std::fmt;
use std::num::ParseIntError;

/// Whether a segment addresses an object key or an array slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Key,
    Index,
}

/// One parsed unit of a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// The key string, or the index's literal text
    pub value: String,
    /// True for the final segment of a path
    pub is_leaf: bool,
}

impl Segment {
    pub fn key(value: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Key,
            value: value.into(),
            is_leaf: false,
        }
    }

    pub fn index(value: impl Into<String>) -> Self {
        Self {
            kind: SegmentKind::Index,
            value: value.into(),
            is_leaf: false,
        }
    }

    /// Mark this segment as the last one of its path
    pub fn into_leaf(mut self) -> Self {
        self.is_leaf = true;
        self
    }

    /// Parse the index text as a signed integer.
    ///
    /// Negative values parse successfully; range checks belong to the
    /// traversal that knows the array length.
    pub fn parse_index(&self) -> Result<i64, ParseIntError> {
        self.value.parse::<i64>()
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SegmentKind::Key => f.write_str(&self.value),
            SegmentKind::Index => write!(f, "[{}]", self.value),
        }
    }
}

/// Parse a path string into segments.
///
/// # Examples
///
/// ```
/// use layercfg_tree::path::{parse_path, SegmentKind};
///
/// let path = parse_path("databases.main.version[0][1]");
/// let kinds: Vec<_> = path.iter().map(|s| s.kind).collect();
/// assert_eq!(kinds, vec![
///     SegmentKind::Key,
///     SegmentKind::Key,
///     SegmentKind::Key,
///     SegmentKind::Index,
///     SegmentKind::Index,
/// ]);
/// assert!(path.last().unwrap().is_leaf);
/// ```
pub fn parse_path(path: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current_key = String::new();
    let mut chars = path.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                if !current_key.is_empty() {
                    segments.push(Segment::key(std::mem::take(&mut current_key)));
                }
            }
            '[' => {
                if !current_key.is_empty() {
                    segments.push(Segment::key(std::mem::take(&mut current_key)));
                }
                let mut index = String::new();
                for ch in chars.by_ref() {
                    if ch == ']' {
                        break;
                    }
                    index.push(ch);
                }
                segments.push(Segment::index(index));
            }
            _ => current_key.push(ch),
        }
    }

    if !current_key.is_empty() {
        segments.push(Segment::key(current_key));
    }

    if let Some(last) = segments.last_mut() {
        last.is_leaf = true;
    }

    segments
}

/// Render segments back into canonical path syntax.
///
/// ```
/// use layercfg_tree::path::{parse_path, render_path};
///
/// assert_eq!(render_path(&parse_path("a..b[0]c")), "a.b[0].c");
/// ```
pub fn render_path(segments: &[Segment]) -> String {
    let mut rendered = String::new();
    for segment in segments {
        if segment.kind == SegmentKind::Key && !rendered.is_empty() {
            rendered.push('.');
        }
        rendered.push_str(&segment.to_string());
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_path_simple() {
        let path = parse_path("name");
        assert_eq!(path, vec![Segment::key("name").into_leaf()]);
    }

    #[test]
    fn test_parse_path_dotted() {
        let path = parse_path("config.database.host");
        assert_eq!(
            path,
            vec![
                Segment::key("config"),
                Segment::key("database"),
                Segment::key("host").into_leaf(),
            ]
        );
    }

    #[test]
    fn test_parse_path_array_index() {
        let path = parse_path("items[0]");
        assert_eq!(
            path,
            vec![Segment::key("items"), Segment::index("0").into_leaf()]
        );
    }

    #[test]
    fn test_parse_path_multi_dimensional() {
        let path = parse_path("a.b[0][1]");
        assert_eq!(
            path,
            vec![
                Segment::key("a"),
                Segment::key("b"),
                Segment::index("0"),
                Segment::index("1").into_leaf(),
            ]
        );
    }

    #[test]
    fn test_parse_path_keeps_raw_index_text() {
        let path = parse_path("arr[-1]");
        assert_eq!(path[1], Segment::index("-1").into_leaf());
        assert_eq!(path[1].parse_index(), Ok(-1));

        let path = parse_path("arr[x]");
        assert_eq!(path[1].value, "x");
        assert!(path[1].parse_index().is_err());
    }

    #[test]
    fn test_only_last_segment_is_leaf() {
        let path = parse_path("a[0].b.c[2]");
        let leaves: Vec<bool> = path.iter().map(|s| s.is_leaf).collect();
        assert_eq!(leaves, vec![false, false, false, false, true]);
    }

    #[rstest]
    #[case::empty("", "")]
    #[case::consecutive_dots("a..b", "a.b")]
    #[case::leading_dot(".a", "a")]
    #[case::trailing_dot("a.", "a")]
    #[case::unterminated_bracket("a[1", "a[1]")]
    #[case::text_after_bracket("a[0]b", "a[0].b")]
    #[case::empty_bracket("a[]", "a[]")]
    #[case::leading_bracket("[0].a", "[0].a")]
    fn test_malformed_paths_normalize(#[case] input: &str, #[case] rendered: &str) {
        assert_eq!(render_path(&parse_path(input)), rendered);
    }

    #[test]
    fn test_empty_path_has_no_segments() {
        assert!(parse_path("").is_empty());
        assert!(parse_path("...").is_empty());
    }

    #[test]
    fn test_segment_display() {
        assert_eq!(Segment::key("host").to_string(), "host");
        assert_eq!(Segment::index("3").to_string(), "[3]");
    }
}
