//! Owned document tree.
//!
//! Documents are parsed by the `markdown` crate and converted into this
//! smaller tree, which carries only what the normalization passes and the
//! serializer need. Every structural edit goes through [`visit`], which
//! splices a parent's child list instead of mutating the node being
//! visited.

pub mod parse;
pub mod serialize;
pub mod visit;

use serde::Serialize;

pub use parse::parse;
pub use serialize::serialize;
pub use visit::{visit, Step};

/// Kind of a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Root,
    Heading,
    Paragraph,
    Text,
    Emphasis,
    Strong,
    Delete,
    InlineCode,
    Code,
    List,
    ListItem,
    Link,
    LinkReference,
    Image,
    ImageReference,
    Table,
    TableRow,
    TableCell,
    ThematicBreak,
    Html,
    Blockquote,
    Break,
    /// Anything else the markdown provider produces (definitions, footnotes).
    Other,
}

/// Kind-specific attributes that only the serializer cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
    /// Heading depth, 1-6.
    pub depth: Option<u8>,
    /// Whether a list is ordered.
    pub ordered: bool,
    /// First number of an ordered list.
    pub start: Option<u32>,
    /// Target of links and images.
    pub url: Option<String>,
}

/// A node of the document tree.
///
/// `value` holds the literal payload of text, inline code, code, raw markup
/// and the alt text of images. Containers use `children` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    pub value: Option<String>,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Node {
    pub fn root(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Root, children)
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::parent(NodeKind::Paragraph, children)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::literal(NodeKind::Text, value)
    }

    pub fn parent(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            value: None,
            attributes: Attributes::default(),
            children,
        }
    }

    pub fn literal(kind: NodeKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            attributes: Attributes::default(),
            children: Vec::new(),
        }
    }

    pub fn void(kind: NodeKind) -> Self {
        Self::parent(kind, Vec::new())
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    /// In-order concatenation of every literal value and image alt text
    /// below (and including) this node.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(node: &Node, out: &mut String) {
    if let Some(value) = &node.value {
        out.push_str(value);
    }
    for child in &node.children {
        collect_text(child, out);
    }
}

/// Number of words in `text` when split on single spaces.
///
/// Consecutive spaces produce empty words, and the empty string counts as
/// one word.
pub fn word_count(text: &str) -> usize {
    text.split(' ').count()
}
