//! Tagged DOM intermediate representation.
//!
//! The normalizer walks a tiny tagged tree instead of a parser-specific
//! node type: an element with a lowercase name, attributes and children,
//! or a text leaf. Any HTML parser can be adapted by building this tree
//! once up front (`html.rs` does so for `scraper`).

/// A parsed markup node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNode {
    Element {
        /// Lowercase tag name
        name: String,
        /// Attribute name/value pairs in document order
        attrs: Vec<(String, String)>,
        children: Vec<DomNode>,
    },
    Text(String),
}

impl DomNode {
    /// Create an element node with no attributes
    pub fn element(name: &str) -> Self {
        Self::Element {
            name: name.to_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element node with attributes
    pub fn element_with_attrs(name: &str, attrs: Vec<(&str, &str)>) -> Self {
        Self::Element {
            name: name.to_lowercase(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_string()))
                .collect(),
            children: Vec::new(),
        }
    }

    /// Create a text leaf
    pub fn text(content: &str) -> Self {
        Self::Text(content.to_string())
    }

    /// Tag name for elements, `None` for text
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { name, .. } => Some(name),
            Self::Text(_) => None,
        }
    }

    /// True for `<ul>` and `<ol>`
    pub fn is_list(&self) -> bool {
        matches!(self.tag(), Some("ul" | "ol"))
    }

    /// True for `<li>`
    pub fn is_list_item(&self) -> bool {
        self.tag() == Some("li")
    }

    /// True for a text leaf containing only whitespace
    pub fn is_blank_text(&self) -> bool {
        matches!(self, Self::Text(t) if t.trim().is_empty())
    }

    /// Attribute lookup by lowercase name
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            Self::Text(_) => None,
        }
    }

    /// Child nodes (empty for text leaves)
    pub fn children(&self) -> &[DomNode] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text(_) => &[],
        }
    }

    /// Append a child to an element; no-op on text leaves
    pub fn add_child(&mut self, child: DomNode) {
        if let Self::Element { children, .. } = self {
            children.push(child);
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(t) => t.clone(),
            Self::Element { children, .. } => {
                children.iter().map(|c| c.text_content()).collect()
            }
        }
    }

    /// First `<ul>`/`<ol>` in document order, including this node itself
    pub fn find_first_list(&self) -> Option<&DomNode> {
        if self.is_list() {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_first_list())
    }
}
