//! Content tree abstraction consumed by the extractor.

use mw_core::{MwError, Result};
use serde::{Deserialize, Serialize};

/// Tags rendered on their own line.
pub const BLOCK_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6",
    "section", "article", "aside", "header", "footer", "main", "nav",
    "blockquote", "pre", "ul", "ol", "li", "div",
];

pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// A node of an editable content tree.
///
/// Host trees implement this to be walked by [`crate::extract`].
pub trait ContentNode {
    /// Textual content if this is a text leaf.
    fn text(&self) -> Option<&str>;

    /// Element tag name, `None` for text leaves.
    fn tag(&self) -> Option<&str>;

    /// Children in document order.
    fn children(&self) -> Vec<&Self>;

    /// Whether the node forces line breaks around its content.
    fn is_block(&self) -> bool {
        self.tag().map(is_block_tag).unwrap_or(false)
    }
}

/// Owned content tree, as sent by the editor surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Text {
        text: String,
    },
    Element {
        tag: String,
        #[serde(default)]
        children: Vec<Node>,
    },
}

impl Node {
    pub fn leaf(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element { tag: tag.into(), children }
    }

    /// Parse a tree from JSON, rejecting anything that is not a node.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let node: Node = serde_json::from_value(value)
            .map_err(|e| MwError::MalformedTree(e.to_string()))?;
        node.check_tags()?;
        Ok(node)
    }

    fn check_tags(&self) -> Result<()> {
        match self {
            Node::Text { .. } => Ok(()),
            Node::Element { tag, children } => {
                if tag.trim().is_empty() {
                    return Err(MwError::MalformedTree("element with empty tag".into()));
                }
                children.iter().try_for_each(Node::check_tags)
            }
        }
    }
}

impl ContentNode for Node {
    fn text(&self) -> Option<&str> {
        match self {
            Node::Text { text } => Some(text),
            Node::Element { .. } => None,
        }
    }

    fn tag(&self) -> Option<&str> {
        match self {
            Node::Text { .. } => None,
            Node::Element { tag, .. } => Some(tag),
        }
    }

    fn children(&self) -> Vec<&Self> {
        match self {
            Node::Text { .. } => Vec::new(),
            Node::Element { children, .. } => children.iter().collect(),
        }
    }
}
