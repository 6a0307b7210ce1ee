//! Flat list-item model shared between the normalizer and the emitters.
//!
//! The HTML front end flattens whatever nesting it finds into an ordered
//! sequence of [`ListItem`] values. Nesting survives only as the `depth`
//! field; consumers must not assume depths are contiguous or increase by
//! one per level (explicit `aria-level` hints can produce arbitrary jumps).

use serde::Serialize;

/// The two list flavours Slack's rich-text format distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Unordered list (`<ul>`)
    Bullet,
    /// Ordered list (`<ol>`)
    Ordered,
}

/// One line of output.
///
/// `kind` is `None` only for the no-list fallback, where the whole input
/// is carried as a single plain paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Trimmed visible text, inline markup flattened away
    pub text: String,
    /// List flavour, or `None` for the fallback paragraph
    pub kind: Option<ListKind>,
    /// Indentation level, 0 = top level
    pub depth: u32,
    /// Identity of the list element this item came from, assigned in
    /// traversal order. Ordered-list numbering restarts per scope.
    pub scope: u32,
}

impl ListItem {
    pub fn new(text: impl Into<String>, kind: Option<ListKind>, depth: u32, scope: u32) -> Self {
        Self {
            text: text.into(),
            kind,
            depth,
            scope,
        }
    }
}

/// Ordered, flattened sequence of list items in document order
pub type ListForest = Vec<ListItem>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ListKind::Bullet).unwrap(), "\"bullet\"");
        assert_eq!(serde_json::to_string(&ListKind::Ordered).unwrap(), "\"ordered\"");
    }

    #[test]
    fn test_new_trims_nothing() {
        // Trimming is the normalizer's job; the model stores what it is given.
        let item = ListItem::new(" padded ", Some(ListKind::Bullet), 2, 1);
        assert_eq!(item.text, " padded ");
        assert_eq!(item.depth, 2);
    }
}
