//! TextyService - the main entry point for HTML list conversion.

use texty_core::{build_delta, build_payload, render_plain, Delta, OutlineOptions};
use tracing::debug;

use crate::node::DomNode;
use crate::normalizer::normalize;
use crate::Result;

/// Everything one conversion produces.
///
/// `payload` is the `org.chromium.web-custom-data` byte sequence;
/// `plain_text` is the outline also carried inside it. Both are built
/// from the same forest, so they always describe the same lines.
#[derive(Debug, Clone)]
pub struct Convert {
    /// Final clipboard wire payload
    pub payload: Vec<u8>,
    /// Newline-joined plain-text outline, no trailing newline
    pub plain_text: String,
    /// The rich-text operations before JSON serialization
    pub delta: Delta,
}

/// The main service for converting HTML lists to Slack's paste format
#[derive(Debug, Default)]
pub struct TextyService {
    options: OutlineOptions,
}

impl TextyService {
    /// Create a service with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service with custom outline options
    pub fn with_options(options: OutlineOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut OutlineOptions {
        &mut self.options
    }

    /// Convert a parsed document.
    ///
    /// One call is a pure function of its input; the service holds no
    /// state between conversions.
    pub fn convert(&self, root: &DomNode) -> Result<Convert> {
        let forest = normalize(root);

        let plain_text = render_plain(&forest, &self.options);
        let delta = build_delta(&forest);
        let payload = build_payload(&plain_text, &delta)?;

        debug!(
            lines = forest.len(),
            payload_bytes = payload.len(),
            "conversion complete"
        );

        Ok(Convert {
            payload,
            plain_text,
            delta,
        })
    }

    /// Convert an HTML fragment string
    #[cfg(feature = "html")]
    pub fn convert_html(&self, html: &str) -> Result<Convert> {
        self.convert(&crate::html::parse_html(html))
    }
}
