//! texty-core - outline model, rich-text delta and clipboard wire codec
//!
//! This crate provides the data structures and encoders shared by the HTML
//! front end and the CLI. It knows nothing about HTML: the front end hands
//! it a flat, ordered sequence of list items (a [`ListForest`]) and it
//! produces the two synchronized outputs Slack expects on paste.
//!
//! # Architecture
//!
//! ```text
//!                 ┌─────────────┐──▶ plain-text outline
//! ListForest ────▶│   outline   │
//!                 │ projections │──▶ Delta (rich-text ops)
//!                 └─────────────┘          │
//!                                          ▼
//!                 ┌─────────────┐   compact JSON
//!                 │   payload   │◀─────────┘
//!                 │   builder   │──▶ Chromium web-custom-data bytes
//!                 └─────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use texty_core::{build_delta, render_plain, ListItem, ListKind, OutlineOptions};
//!
//! let forest = vec![
//!     ListItem::new("Item 1", Some(ListKind::Bullet), 0, 0),
//!     ListItem::new("Item 2", Some(ListKind::Bullet), 0, 0),
//! ];
//!
//! let text = render_plain(&forest, &OutlineOptions::default());
//! assert_eq!(text, "- Item 1\n- Item 2");
//!
//! let delta = build_delta(&forest);
//! assert_eq!(delta.ops.len(), 4);
//! ```

mod delta;
mod item;
mod outline;
mod payload;
mod pickle;

pub use delta::{Delta, Op, OpAttributes};
pub use item::{ListForest, ListItem, ListKind};
pub use outline::{build_delta, render_plain, NumberingStyle, OutlineOptions};
pub use payload::{build_payload, PLAIN_TEXT_KEY, TEXTY_KEY};
pub use pickle::PickleWriter;

/// Error type for encoding operations
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A length does not fit into the 32-bit wire field
    #[error("{field} length {units} exceeds the u32 wire field")]
    Overflow {
        /// Which field overflowed (for diagnostics)
        field: &'static str,
        /// The offending length, in the field's own units
        units: usize,
    },

    /// The rich-text operations could not be serialized to JSON
    #[error("failed to serialize rich-text operations: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
