//! Structural paths of layout elements.
//!
//! A path such as `//Document/Table[2]/TR[3]/TD/P` is parsed once into an
//! [`ElementPath`]: its segments (name plus optional positional index) and a
//! [`PathKind`]. Matching is case-sensitive and segment-aware, so
//! `//Document/Table` is an ancestor of `//Document/Table/TR/TD` but not of
//! `//Document/Table[2]/TR/TD`. Top-level paragraphs are the exception:
//! any first segment starting with `P` is a paragraph.

use std::collections::BTreeMap;

use crate::model::Element;

/// Root prefix of every document-level path.
pub const DOCUMENT_ROOT: &str = "//Document/";

const PARAGRAPH: &str = "P";
const FIGURE: &str = "Figure";
const TABLE: &str = "Table";
const TABLE_ROW: &str = "TR";
const TABLE_DATA: &str = "TD";
const TABLE_HEADER: &str = "TH";

/// What a path denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// A top-level paragraph (`//Document/P`, `//Document/ParagraphSpan`, ...)
    Paragraph,
    /// A figure (`//Document/Figure...`)
    Figure,
    /// A table root (`//Document/Table` without row or cell segments)
    Table,
    /// A table data cell (terminal `TD` segment inside a table)
    TableCell,
    /// Anything else inside a table: rows, header cells, cell paragraphs
    TableContent,
    /// Not used by assembly
    Other,
}

/// One path segment, e.g. `TD[3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Segment name without the positional index
    pub name: &'a str,
    /// 1-based positional index, when present
    pub index: Option<u32>,
}

impl<'a> Segment<'a> {
    fn parse(raw: &'a str) -> Self {
        if let Some(open) = raw.find('[') {
            if let Some(index) = raw[open + 1..]
                .strip_suffix(']')
                .and_then(|n| n.parse().ok())
            {
                return Self {
                    name: &raw[..open],
                    index: Some(index),
                };
            }
        }
        Self {
            name: raw,
            index: None,
        }
    }
}

/// A parsed element path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementPath<'a> {
    raw: &'a str,
    segments: Vec<Segment<'a>>,
    kind: PathKind,
}

impl<'a> ElementPath<'a> {
    /// Parse a path string. Paths outside `//Document/` classify as
    /// [`PathKind::Other`].
    pub fn parse(raw: &'a str) -> Self {
        let segments: Vec<Segment<'a>> = raw
            .strip_prefix(DOCUMENT_ROOT)
            .map(|rest| {
                rest.split('/')
                    .filter(|s| !s.is_empty())
                    .map(Segment::parse)
                    .collect()
            })
            .unwrap_or_default();
        let kind = Self::kind_of(&segments);
        Self {
            raw,
            segments,
            kind,
        }
    }

    fn kind_of(segments: &[Segment<'_>]) -> PathKind {
        let Some(first) = segments.first() else {
            return PathKind::Other;
        };
        match first.name {
            FIGURE => PathKind::Figure,
            TABLE => {
                let inner = &segments[1..];
                let in_rows = inner
                    .iter()
                    .any(|s| matches!(s.name, TABLE_ROW | TABLE_DATA | TABLE_HEADER));
                if !in_rows {
                    PathKind::Table
                } else if inner.last().is_some_and(|s| s.name == TABLE_DATA) {
                    PathKind::TableCell
                } else {
                    PathKind::TableContent
                }
            }
            // Prefix match: `ParagraphSpan` text belongs to the page too.
            name if name.starts_with(PARAGRAPH) => PathKind::Paragraph,
            _ => PathKind::Other,
        }
    }

    /// The original path string.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Structural kind of the path.
    pub fn kind(&self) -> PathKind {
        self.kind
    }

    /// Segments below `//Document/`.
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Name of the last segment, index stripped.
    pub fn terminal_name(&self) -> Option<&'a str> {
        self.segments.last().map(|s| s.name)
    }

    /// Check if the path ends in a paragraph segment (`.../P` or `.../P[n]`).
    pub fn is_paragraph_leaf(&self) -> bool {
        self.terminal_name() == Some(PARAGRAPH)
    }

    /// Check if this path lies strictly below `ancestor`.
    pub fn is_within(&self, ancestor: &ElementPath<'_>) -> bool {
        self.raw
            .strip_prefix(ancestor.raw)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Classify an element by path and content.
///
/// Paragraphs only count when they carry non-empty text; a text-less
/// paragraph classifies as [`PathKind::Other`].
pub fn classify(element: &Element) -> PathKind {
    match ElementPath::parse(&element.path).kind() {
        PathKind::Paragraph if element.non_empty_text().is_none() => PathKind::Other,
        kind => kind,
    }
}

/// Count `//Document/` elements by terminal segment name.
///
/// Positional indices are stripped, so `Table[2]` counts as `Table`.
pub fn tally_element_types(elements: &[Element]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for element in elements {
        let path = ElementPath::parse(&element.path);
        if let Some(name) = path.terminal_name() {
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }
    counts
}
