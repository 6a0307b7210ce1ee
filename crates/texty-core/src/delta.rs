//! Quill-style delta structures for Slack's `slack/texty` clipboard entry.
//!
//! Field order matters: Slack's own payloads serialize `attributes` before
//! `insert`, and `list` before `indent`. The structs below preserve that
//! order so the compact JSON matches what Slack emits byte for byte.

use serde::Serialize;

use crate::item::ListKind;

/// The full operation list, serialized as `{"ops":[...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delta {
    pub ops: Vec<Op>,
}

impl Delta {
    /// Compact JSON with no whitespace between tokens
    pub fn to_compact_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A single rich-text operation: line content, or a `"\n"` terminator
/// carrying the line's formatting attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Op {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<OpAttributes>,
    pub insert: String,
}

impl Op {
    /// Content operation holding one line's text
    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            attributes: None,
            insert: text.into(),
        }
    }

    /// Line terminator with list formatting
    pub fn terminator(list: ListKind, indent: Option<u32>) -> Self {
        Self {
            attributes: Some(OpAttributes { list, indent }),
            insert: "\n".to_string(),
        }
    }

    /// Bare line terminator (the no-list fallback)
    pub fn bare_terminator() -> Self {
        Self {
            attributes: None,
            insert: "\n".to_string(),
        }
    }
}

/// Attributes attached to a line terminator.
///
/// `indent` is present exactly when the line sits below the top level and
/// then equals the line's depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpAttributes {
    pub list: ListKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_op_json() {
        let op = Op::insert("Item 1");
        assert_eq!(serde_json::to_string(&op).unwrap(), r#"{"insert":"Item 1"}"#);
    }

    #[test]
    fn test_terminator_top_level_omits_indent() {
        let op = Op::terminator(ListKind::Bullet, None);
        assert_eq!(
            serde_json::to_string(&op).unwrap(),
            r#"{"attributes":{"list":"bullet"},"insert":"\n"}"#
        );
    }

    #[test]
    fn test_terminator_nested_carries_indent() {
        let op = Op::terminator(ListKind::Ordered, Some(2));
        assert_eq!(
            serde_json::to_string(&op).unwrap(),
            r#"{"attributes":{"list":"ordered","indent":2},"insert":"\n"}"#
        );
    }

    #[test]
    fn test_bare_terminator_has_no_attributes() {
        let op = Op::bare_terminator();
        assert_eq!(serde_json::to_string(&op).unwrap(), r#"{"insert":"\n"}"#);
    }

    #[test]
    fn test_delta_compact_json() {
        let delta = Delta {
            ops: vec![Op::insert("Hi"), Op::terminator(ListKind::Bullet, None)],
        };
        assert_eq!(
            delta.to_compact_json().unwrap(),
            r#"{"ops":[{"insert":"Hi"},{"attributes":{"list":"bullet"},"insert":"\n"}]}"#
        );
    }
}
