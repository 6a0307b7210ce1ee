//! Tolerant normalization of list markup into a flat [`ListForest`].
//!
//! Real-world list HTML is rarely well formed. Google Docs in particular
//! emits nested lists as *siblings* of the list item they belong to
//! instead of children. The walk below accepts both shapes and produces
//! the same forest for either, so everything downstream only ever sees a
//! clean, ordered, depth-annotated sequence of items.

use texty_core::{ListForest, ListItem, ListKind};
use tracing::{debug, trace};

use crate::node::DomNode;

/// Hard cap on list nesting; deeper lists are dropped rather than walked.
/// Guards against adversarial inputs, not a correctness concern.
pub const MAX_LIST_DEPTH: u32 = 64;

/// Normalize a parsed document into a flat list forest.
///
/// Processing starts at the first `<ul>`/`<ol>` in document order. When
/// the document contains no list at all, the whole visible text becomes
/// a single fallback item with no list kind.
pub fn normalize(root: &DomNode) -> ListForest {
    let mut forest = Vec::new();

    match root.find_first_list() {
        Some(list) => {
            let mut next_scope = 0;
            walk_list(list, 0, &mut forest, &mut next_scope);
            debug!(items = forest.len(), "normalized list forest");
        }
        None => {
            let text = root.text_content().trim().to_string();
            debug!("no list element found, falling back to plain text");
            forest.push(ListItem::new(text, None, 0, 0));
        }
    }

    forest
}

fn walk_list(list: &DomNode, depth: u32, out: &mut Vec<ListItem>, next_scope: &mut u32) {
    if depth > MAX_LIST_DEPTH {
        debug!(depth, "list nesting exceeds cap, skipping subtree");
        return;
    }

    let kind = if list.tag() == Some("ol") {
        ListKind::Ordered
    } else {
        ListKind::Bullet
    };
    let scope = *next_scope;
    *next_scope += 1;

    let children = list.children();
    let mut i = 0;

    while i < children.len() {
        let child = &children[i];

        if child.is_list_item() {
            let item_depth = level_hint(child).unwrap_or(depth);
            let (text, nested) = split_item(child);
            let text = text.trim();

            if text.is_empty() {
                trace!("dropping empty list item");
            } else {
                out.push(ListItem::new(text, Some(kind), item_depth, scope));
            }

            for nested_list in nested {
                walk_list(nested_list, item_depth + 1, out, next_scope);
            }
            i += 1;

            // Sibling promotion: lists emitted as following siblings of an
            // item (the Google Docs shape) belong one level below it. The
            // scan ends for good at the first non-list, non-blank sibling.
            while i < children.len() {
                let sibling = &children[i];
                if sibling.is_blank_text() {
                    i += 1;
                } else if sibling.is_list() {
                    walk_list(sibling, item_depth + 1, out, next_scope);
                    i += 1;
                } else {
                    break;
                }
            }
        } else if child.is_list() {
            // Orphan list with no preceding item in this scope.
            walk_list(child, depth + 1, out, next_scope);
            i += 1;
        } else {
            i += 1;
        }
    }
}

/// Explicit 1-based nesting hint, converted to a 0-based depth.
/// Non-positive or non-numeric values are ignored.
fn level_hint(item: &DomNode) -> Option<u32> {
    let level: u32 = item.attr("aria-level")?.parse().ok()?;
    (level >= 1).then(|| level - 1)
}

/// Split a list item into its own text and its directly nested lists.
///
/// Own text is the concatenation of direct text children and the
/// flattened text of non-list element children; nested lists are handed
/// back untouched so they are walked separately, never duplicated.
fn split_item(item: &DomNode) -> (String, Vec<&DomNode>) {
    let mut text = String::new();
    let mut nested = Vec::new();

    for child in item.children() {
        match child {
            DomNode::Text(t) => text.push_str(t),
            element if element.is_list() => nested.push(element),
            element => text.push_str(&element.text_content()),
        }
    }

    (text, nested)
}
