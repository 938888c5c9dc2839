//! Binding to the `markdown` crate.

use markdown::mdast;
use markdown::{Constructs, ParseOptions};

use super::{Attributes, Node, NodeKind};
use crate::core::errors::{Error, Result};

/// GFM constructs, with front matter left off so that a leading `---`
/// block is seen as thematic breaks.
fn parse_options() -> ParseOptions {
    ParseOptions {
        constructs: Constructs {
            frontmatter: false,
            ..Constructs::gfm()
        },
        ..ParseOptions::gfm()
    }
}

/// Parse markdown text into a document tree rooted at a `Root` node.
///
/// `name` identifies the document in the error when parsing fails.
pub fn parse(name: &str, text: &str) -> Result<Node> {
    let tree = markdown::to_mdast(text, &parse_options())
        .map_err(|message| Error::parse(name, message.to_string()))?;
    Ok(convert(tree))
}

fn convert_all(children: Vec<mdast::Node>) -> Vec<Node> {
    children.into_iter().map(convert).collect()
}

fn convert(node: mdast::Node) -> Node {
    use mdast::Node as M;

    match node {
        M::Root(n) => Node::root(convert_all(n.children)),
        M::Paragraph(n) => Node::paragraph(convert_all(n.children)),
        M::Heading(n) => Node::parent(NodeKind::Heading, convert_all(n.children)).with_attributes(
            Attributes {
                depth: Some(n.depth),
                ..Attributes::default()
            },
        ),
        M::Text(n) => Node::text(n.value),
        M::Emphasis(n) => Node::parent(NodeKind::Emphasis, convert_all(n.children)),
        M::Strong(n) => Node::parent(NodeKind::Strong, convert_all(n.children)),
        M::Delete(n) => Node::parent(NodeKind::Delete, convert_all(n.children)),
        M::InlineCode(n) => Node::literal(NodeKind::InlineCode, n.value),
        M::InlineMath(n) => Node::literal(NodeKind::InlineCode, n.value),
        M::Code(n) => Node::literal(NodeKind::Code, n.value),
        M::Math(n) => Node::literal(NodeKind::Code, n.value),
        M::List(n) => Node::parent(NodeKind::List, convert_all(n.children)).with_attributes(
            Attributes {
                ordered: n.ordered,
                start: n.start,
                ..Attributes::default()
            },
        ),
        M::ListItem(n) => Node::parent(NodeKind::ListItem, convert_all(n.children)),
        M::Link(n) => Node::parent(NodeKind::Link, convert_all(n.children)).with_attributes(
            Attributes {
                url: Some(n.url),
                ..Attributes::default()
            },
        ),
        M::LinkReference(n) => Node::parent(NodeKind::LinkReference, convert_all(n.children)),
        M::Image(n) => Node::literal(NodeKind::Image, n.alt).with_attributes(Attributes {
            url: Some(n.url),
            ..Attributes::default()
        }),
        M::ImageReference(n) => Node::literal(NodeKind::ImageReference, n.alt),
        M::Table(n) => Node::parent(NodeKind::Table, convert_all(n.children)),
        M::TableRow(n) => Node::parent(NodeKind::TableRow, convert_all(n.children)),
        M::TableCell(n) => Node::parent(NodeKind::TableCell, convert_all(n.children)),
        M::ThematicBreak(_) => Node::void(NodeKind::ThematicBreak),
        M::Html(n) => Node::literal(NodeKind::Html, n.value),
        M::Blockquote(n) => Node::parent(NodeKind::Blockquote, convert_all(n.children)),
        M::Break(_) => Node::void(NodeKind::Break),
        other => {
            let children = other.children().cloned().unwrap_or_default();
            Node::parent(NodeKind::Other, convert_all(children))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(node: &Node) -> Vec<NodeKind> {
        node.children.iter().map(|c| c.kind).collect()
    }

    #[test]
    fn test_parse_block_kinds() {
        let root = parse("doc.md", "# Title\n\nSome prose.\n\n```\ncode\n```\n").unwrap();
        assert_eq!(root.kind, NodeKind::Root);
        assert_eq!(
            kinds(&root),
            vec![NodeKind::Heading, NodeKind::Paragraph, NodeKind::Code]
        );
        assert_eq!(root.children[0].attributes.depth, Some(1));
    }

    #[test]
    fn test_leading_dashes_stay_thematic_breaks() {
        let root = parse("doc.md", "---\n\nBody text here.\n\n---\n\nMore.\n").unwrap();
        assert_eq!(root.children[0].kind, NodeKind::ThematicBreak);
        assert_eq!(root.children[2].kind, NodeKind::ThematicBreak);
    }

    #[test]
    fn test_parse_gfm_table() {
        let root = parse("doc.md", "| a | b |\n| - | - |\n| c | d |\n").unwrap();
        let table = &root.children[0];
        assert_eq!(table.kind, NodeKind::Table);
        assert_eq!(table.children.len(), 2);
        assert_eq!(table.children[1].children[0].kind, NodeKind::TableCell);
    }

    #[test]
    fn test_image_alt_is_stored_as_value() {
        let root = parse("doc.md", "![a cat](cat.png)\n").unwrap();
        let image = &root.children[0].children[0];
        assert_eq!(image.kind, NodeKind::Image);
        assert_eq!(image.value.as_deref(), Some("a cat"));
        assert_eq!(image.attributes.url.as_deref(), Some("cat.png"));
    }
}
