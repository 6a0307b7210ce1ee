//! # texty
//!
//! Convert HTML list fragments into Slack's clipboard paste format.
//!
//! Slack's message composer understands a custom clipboard entry
//! (`org.chromium.web-custom-data` carrying a `slack/texty` delta).
//! Pasting HTML lists directly loses their structure; this library
//! rebuilds it by normalizing the markup into a flat list forest and
//! encoding that forest both as a plain-text outline and as the binary
//! payload Slack reads.
//!
//! The normalizer is deliberately tolerant: it accepts the malformed
//! sibling-nesting shape Google Docs produces, honors explicit
//! `aria-level` hints, and degrades to a single plain paragraph when the
//! input contains no list at all.
//!
//! ## Example
//!
//! ```rust
//! use texty::TextyService;
//!
//! let service = TextyService::new();
//! let result = service
//!     .convert_html("<ul><li>Item 1</li><li>Item 2</li></ul>")
//!     .unwrap();
//!
//! assert_eq!(result.plain_text, "- Item 1\n- Item 2");
//! assert!(!result.payload.is_empty());
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
pub mod normalizer;
mod service;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::DomNode;
pub use normalizer::{normalize, MAX_LIST_DEPTH};
pub use service::{Convert, TextyService};
pub use texty_core::{
    Delta, ListForest, ListItem, ListKind, NumberingStyle, Op, OpAttributes, OutlineOptions,
};

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum TextyError {
    /// The outputs could not be encoded into the wire payload
    #[error(transparent)]
    Encode(#[from] texty_core::Error),
}

pub type Result<T> = std::result::Result<T, TextyError>;
