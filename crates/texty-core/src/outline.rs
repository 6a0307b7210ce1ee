//! Projections from a [`ListForest`] to the two paste representations.
//!
//! Both projections are single, independent passes over the same forest:
//! one produces the plain-text outline, the other the rich-text delta.
//! Neither mutates the forest, so they can be tested in isolation.

use std::collections::HashMap;

use crate::delta::{Delta, Op};
use crate::item::{ListForest, ListItem, ListKind};

/// How ordered-list numbering restarts in the plain-text outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingStyle {
    /// Counter restarts for every distinct list element (Slack's behavior)
    #[default]
    PerList,
    /// Counter is kept per depth and restarts when the list flavour at
    /// that depth changes or a shallower item intervenes
    PerDepth,
}

/// Options for the plain-text projection
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// String repeated once per depth level
    pub indent_unit: String,

    /// Ordered-list numbering policy
    pub numbering: NumberingStyle,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            indent_unit: "    ".to_string(),
            numbering: NumberingStyle::PerList,
        }
    }
}

/// Render the newline-joined plain-text outline, without a trailing newline.
pub fn render_plain(forest: &ListForest, options: &OutlineOptions) -> String {
    let mut numbering = Numbering::new(options.numbering);
    let mut lines = Vec::with_capacity(forest.len());

    for item in forest {
        lines.push(render_line(item, &mut numbering, options));
    }

    lines.join("\n")
}

fn render_line(item: &ListItem, numbering: &mut Numbering, options: &OutlineOptions) -> String {
    let Some(kind) = item.kind else {
        // Fallback paragraph: no marker, no indent.
        return item.text.clone();
    };

    let indent = options.indent_unit.repeat(item.depth as usize);
    match kind {
        ListKind::Bullet => {
            numbering.observe(item);
            format!("{}- {}", indent, item.text)
        }
        ListKind::Ordered => {
            let n = numbering.next(item);
            format!("{}{}. {}", indent, n, item.text)
        }
    }
}

/// Build the rich-text operation list: one content/terminator pair per item.
pub fn build_delta(forest: &ListForest) -> Delta {
    let mut ops = Vec::with_capacity(forest.len() * 2);

    for item in forest {
        ops.push(Op::insert(item.text.clone()));
        match item.kind {
            Some(kind) => {
                let indent = (item.depth > 0).then_some(item.depth);
                ops.push(Op::terminator(kind, indent));
            }
            None => ops.push(Op::bare_terminator()),
        }
    }

    Delta { ops }
}

/// Ordered-list counters for the plain-text projection.
///
/// `PerList` keys counters by the item's scope id. `PerDepth` keeps a
/// counter stack keyed by depth, dropped whenever a shallower item or a
/// flavour change invalidates it.
struct Numbering {
    style: NumberingStyle,
    per_scope: HashMap<u32, u32>,
    per_depth: Vec<(ListKind, u32)>,
}

impl Numbering {
    fn new(style: NumberingStyle) -> Self {
        Self {
            style,
            per_scope: HashMap::new(),
            per_depth: Vec::new(),
        }
    }

    /// Record a non-ordered item so `PerDepth` counters reset correctly
    fn observe(&mut self, item: &ListItem) {
        if self.style == NumberingStyle::PerDepth {
            self.invalidate(item.depth, ListKind::Bullet);
        }
    }

    /// Next 1-based ordinal for an ordered item
    fn next(&mut self, item: &ListItem) -> u32 {
        match self.style {
            NumberingStyle::PerList => {
                let counter = self.per_scope.entry(item.scope).or_insert(0);
                *counter += 1;
                *counter
            }
            NumberingStyle::PerDepth => {
                self.invalidate(item.depth, ListKind::Ordered);
                let depth = item.depth as usize;
                if self.per_depth.len() <= depth {
                    self.per_depth.resize(depth + 1, (ListKind::Ordered, 0));
                }
                let slot = &mut self.per_depth[depth];
                slot.0 = ListKind::Ordered;
                slot.1 += 1;
                slot.1
            }
        }
    }

    fn invalidate(&mut self, depth: u32, kind: ListKind) {
        let depth = depth as usize;
        // Anything deeper restarts once we surface again.
        self.per_depth.truncate(depth + 1);
        if let Some(slot) = self.per_depth.get_mut(depth) {
            if slot.0 != kind {
                *slot = (kind, 0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ListItem;
    use pretty_assertions::assert_eq;

    fn bullet(text: &str, depth: u32, scope: u32) -> ListItem {
        ListItem::new(text, Some(ListKind::Bullet), depth, scope)
    }

    fn ordered(text: &str, depth: u32, scope: u32) -> ListItem {
        ListItem::new(text, Some(ListKind::Ordered), depth, scope)
    }

    #[test]
    fn test_flat_bullets() {
        let forest = vec![bullet("Item 1", 0, 0), bullet("Item 2", 0, 0)];
        let text = render_plain(&forest, &OutlineOptions::default());
        assert_eq!(text, "- Item 1\n- Item 2");
    }

    #[test]
    fn test_nested_bullet_indents() {
        let forest = vec![bullet("Level 1", 0, 0), bullet("Level 2", 1, 1)];
        let text = render_plain(&forest, &OutlineOptions::default());
        assert_eq!(text, "- Level 1\n    - Level 2");
    }

    #[test]
    fn test_ordered_numbering_restarts_per_scope() {
        let forest = vec![
            ordered("First", 0, 0),
            ordered("Second", 0, 0),
            ordered("Nested", 1, 1),
            ordered("Third", 0, 0),
        ];
        let text = render_plain(&forest, &OutlineOptions::default());
        assert_eq!(text, "1. First\n2. Second\n    1. Nested\n3. Third");
    }

    #[test]
    fn test_ordered_under_bullet() {
        let forest = vec![bullet("Bullet", 0, 0), ordered("Ordered", 1, 1)];
        let text = render_plain(&forest, &OutlineOptions::default());
        assert_eq!(text, "- Bullet\n    1. Ordered");
    }

    #[test]
    fn test_custom_indent_unit() {
        let options = OutlineOptions {
            indent_unit: "\t".to_string(),
            ..Default::default()
        };
        let forest = vec![bullet("a", 0, 0), bullet("b", 2, 1)];
        assert_eq!(render_plain(&forest, &options), "- a\n\t\t- b");
    }

    #[test]
    fn test_per_depth_numbering_continues_across_scopes() {
        let options = OutlineOptions {
            numbering: NumberingStyle::PerDepth,
            ..Default::default()
        };
        // Two sibling ordered scopes at depth 1 with no depth-0 item
        // between them share one counter under PerDepth.
        let forest = vec![
            ordered("a", 1, 1),
            ordered("b", 1, 2),
            ordered("top", 0, 0),
            ordered("c", 1, 3),
        ];
        let text = render_plain(&forest, &options);
        assert_eq!(text, "    1. a\n    2. b\n1. top\n    1. c");
    }

    #[test]
    fn test_delta_pairs_and_indent_attribute() {
        let forest = vec![bullet("Level 1", 0, 0), bullet("Level 2", 1, 1)];
        let delta = build_delta(&forest);
        assert_eq!(delta.ops.len(), 4);
        assert_eq!(delta.ops[0], Op::insert("Level 1"));
        assert_eq!(delta.ops[1], Op::terminator(ListKind::Bullet, None));
        assert_eq!(delta.ops[3], Op::terminator(ListKind::Bullet, Some(1)));
    }

    #[test]
    fn test_delta_never_encodes_ordinals() {
        let forest = vec![ordered("First", 0, 0), ordered("Second", 0, 0)];
        let delta = build_delta(&forest);
        assert_eq!(delta.ops[0].insert, "First");
        assert_eq!(delta.ops[2].insert, "Second");
        assert_eq!(delta.ops[1], Op::terminator(ListKind::Ordered, None));
        assert_eq!(delta.ops[3], Op::terminator(ListKind::Ordered, None));
    }

    #[test]
    fn test_fallback_item_renders_bare() {
        let forest = vec![ListItem::new("Just some text", None, 0, 0)];
        let text = render_plain(&forest, &OutlineOptions::default());
        assert_eq!(text, "Just some text");

        let delta = build_delta(&forest);
        assert_eq!(delta.ops, vec![Op::insert("Just some text"), Op::bare_terminator()]);
    }

    #[test]
    fn test_depth_jump_from_level_hint() {
        // Depths are not required to be contiguous.
        let forest = vec![bullet("a", 0, 0), bullet("b", 3, 0)];
        let text = render_plain(&forest, &OutlineOptions::default());
        assert_eq!(text, "- a\n            - b");
    }
}
