//! Markdown serializer for document trees.
//!
//! Output only has to be good enough to be read as prose again, so no
//! escaping is performed.

use super::{Node, NodeKind};

/// Serialize a tree back to markdown text.
///
/// Non-empty output ends with exactly one newline.
pub fn serialize(node: &Node) -> String {
    let mut out = render(node);
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn render(node: &Node) -> String {
    match node.kind {
        NodeKind::Root | NodeKind::ListItem | NodeKind::Other => flow(&node.children),
        NodeKind::Paragraph | NodeKind::TableCell => phrasing(&node.children),
        NodeKind::Heading => {
            let depth = usize::from(node.attributes.depth.unwrap_or(1));
            format!("{} {}", "#".repeat(depth), phrasing(&node.children))
        }
        NodeKind::Text | NodeKind::Html => value(node).to_string(),
        NodeKind::InlineCode => format!("`{}`", value(node)),
        NodeKind::Code => format!("```\n{}\n```", value(node)),
        NodeKind::Emphasis => format!("*{}*", phrasing(&node.children)),
        NodeKind::Strong => format!("**{}**", phrasing(&node.children)),
        NodeKind::Delete => format!("~~{}~~", phrasing(&node.children)),
        NodeKind::Link => format!(
            "[{}]({})",
            phrasing(&node.children),
            node.attributes.url.as_deref().unwrap_or_default()
        ),
        NodeKind::LinkReference => format!("[{}]", phrasing(&node.children)),
        NodeKind::Image => format!(
            "![{}]({})",
            value(node),
            node.attributes.url.as_deref().unwrap_or_default()
        ),
        NodeKind::ImageReference => format!("![{}]", value(node)),
        NodeKind::ThematicBreak => "***".to_string(),
        NodeKind::Break => "\n".to_string(),
        NodeKind::Blockquote => prefix_lines(&flow(&node.children), "> ", "> "),
        NodeKind::List => list(node),
        NodeKind::Table => table(&node.children),
        NodeKind::TableRow => row(&node.children),
    }
}

fn value(node: &Node) -> &str {
    node.value.as_deref().unwrap_or_default()
}

fn flow(children: &[Node]) -> String {
    children.iter().map(render).collect::<Vec<_>>().join("\n\n")
}

fn phrasing(children: &[Node]) -> String {
    children.iter().map(render).collect()
}

fn list(node: &Node) -> String {
    let start = node.attributes.start.unwrap_or(1);
    node.children
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let bullet = if node.attributes.ordered {
                format!("{}. ", start as usize + index)
            } else {
                "- ".to_string()
            };
            let indent = " ".repeat(bullet.len());
            prefix_lines(&render(item), &bullet, &indent)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn table(rows: &[Node]) -> String {
    let mut lines: Vec<String> = rows.iter().map(|r| row(&r.children)).collect();
    if let Some(header) = rows.first() {
        let delimiter = vec!["---"; header.children.len().max(1)].join(" | ");
        lines.insert(1.min(lines.len()), format!("| {} |", delimiter));
    }
    lines.join("\n")
}

fn row(cells: &[Node]) -> String {
    let cells: Vec<String> = cells.iter().map(render).collect();
    format!("| {} |", cells.join(" | "))
}

/// Prefix the first line with `first` and every following non-empty line
/// with `rest`.
fn prefix_lines(text: &str, first: &str, rest: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| match (index, line.is_empty()) {
            (0, _) => format!("{}{}", first, line),
            (_, true) => String::new(),
            (_, false) => format!("{}{}", rest, line),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{parse, Attributes};

    #[test]
    fn test_empty_root_serializes_to_empty_string() {
        assert_eq!(serialize(&Node::root(vec![])), "");
    }

    #[test]
    fn test_blocks_are_separated_by_blank_lines() {
        let root = Node::root(vec![
            Node::paragraph(vec![Node::text("First.")]),
            Node::paragraph(vec![Node::text("Second.")]),
        ]);
        assert_eq!(serialize(&root), "First.\n\nSecond.\n");
    }

    #[test]
    fn test_inline_wrappers() {
        let root = Node::root(vec![Node::paragraph(vec![
            Node::parent(NodeKind::Emphasis, vec![Node::text("a")]),
            Node::text(" "),
            Node::parent(NodeKind::Strong, vec![Node::text("b")]),
            Node::text(" "),
            Node::literal(NodeKind::InlineCode, "c"),
            Node::text(" "),
            Node::parent(NodeKind::Link, vec![Node::text("d")]).with_attributes(Attributes {
                url: Some("https://example.com".into()),
                ..Attributes::default()
            }),
        ])]);
        assert_eq!(serialize(&root), "*a* **b** `c` [d](https://example.com)\n");
    }

    #[test]
    fn test_heading_depth() {
        let root = parse("doc.md", "### Three\n").unwrap();
        assert_eq!(serialize(&root), "### Three\n");
    }

    #[test]
    fn test_tight_list() {
        let root = parse("doc.md", "- one\n- two\n").unwrap();
        assert_eq!(serialize(&root), "- one\n- two\n");
    }

    #[test]
    fn test_ordered_list_numbers_from_start() {
        let root = parse("doc.md", "3. three\n4. four\n").unwrap();
        assert_eq!(serialize(&root), "3. three\n4. four\n");
    }

    #[test]
    fn test_table_has_delimiter_row() {
        let root = parse("doc.md", "| a | b |\n| - | - |\n| c | d |\n").unwrap();
        assert_eq!(serialize(&root), "| a | b |\n| --- | --- |\n| c | d |\n");
    }

    #[test]
    fn test_blockquote_prefixes_lines() {
        let root = parse("doc.md", "> quoted\n").unwrap();
        assert_eq!(serialize(&root), "> quoted\n");
    }
}
