//! Element list with paths parsed once.

use crate::model::Element;

use super::path::{classify, ElementPath, PathKind};

/// An element together with its parsed path and kind.
#[derive(Debug, Clone)]
pub struct IndexedElement<'a> {
    /// The source element
    pub element: &'a Element,
    /// Parsed path
    pub path: ElementPath<'a>,
    /// Classification (paragraphs require text)
    pub kind: PathKind,
}

/// Read-only view over an element list, in input order.
#[derive(Debug, Clone)]
pub struct ElementIndex<'a> {
    entries: Vec<IndexedElement<'a>>,
}

impl<'a> ElementIndex<'a> {
    /// Parse and classify every element.
    pub fn new(elements: &'a [Element]) -> Self {
        let entries = elements
            .iter()
            .map(|element| IndexedElement {
                element,
                path: ElementPath::parse(&element.path),
                kind: classify(element),
            })
            .collect();
        Self { entries }
    }

    /// All entries in input order.
    pub fn entries(&self) -> &[IndexedElement<'a>] {
        &self.entries
    }

    /// Entries of one kind, in input order.
    pub fn of_kind(&self, kind: PathKind) -> impl Iterator<Item = &IndexedElement<'a>> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    /// Entries lying strictly below `ancestor`, in input order.
    pub fn within<'s>(
        &'s self,
        ancestor: &'s ElementPath<'s>,
    ) -> impl Iterator<Item = &'s IndexedElement<'a>> {
        self.entries.iter().filter(move |e| e.path.is_within(ancestor))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index holds no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
