//! HTML parsing support.
//!
//! Parses an HTML fragment with `scraper` and converts it to the
//! [`DomNode`] tree the normalizer walks. Only elements and text survive
//! the conversion; comments and processing instructions are dropped.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::DomNode;

/// Parse an HTML fragment into a [`DomNode`] tree.
///
/// The returned root is the synthetic `html` element `scraper` wraps
/// fragments in; callers normally hand it straight to the normalizer.
///
/// # Example
///
/// ```rust
/// use texty::{parse_html, TextyService};
///
/// let node = parse_html("<ul><li>Item 1</li></ul>");
/// let result = TextyService::new().convert(&node).unwrap();
/// assert_eq!(result.plain_text, "- Item 1");
/// ```
pub fn parse_html(html: &str) -> DomNode {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

fn scraper_to_node(element: ElementRef) -> DomNode {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();
    let mut node = DomNode::element_with_attrs(element.value().name(), attrs);

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => node.add_child(DomNode::text(&text.text)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
