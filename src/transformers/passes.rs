//! Structural passes that reduce a document tree to its readable prose.
//!
//! Each pass takes ownership of the tree and hands back the rewritten
//! tree. They are listed in the order [`super::Pipeline::standard`] runs
//! them; later passes rely on earlier ones having run.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::{visit, word_count, Node, NodeKind, Step};

/// Text shorter than this many words is treated as a label, not prose.
pub const MIN_PROSE_WORDS: usize = 4;

/// Prefix of admonition directive lines (`:::note Title` and `:::`).
pub const ADMONITION_MARKER: &str = ":::";

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*://\S+").unwrap());

/// Kinds dropped together with their content.
const NON_PROSE_KINDS: &[NodeKind] = &[
    NodeKind::Heading,
    NodeKind::Code,
    NodeKind::Html,
    NodeKind::Image,
    NodeKind::ImageReference,
];

/// Wrapper kinds replaced by their own children.
const UNWRAPPED_KINDS: &[NodeKind] = &[
    NodeKind::Emphasis,
    NodeKind::Strong,
    NodeKind::InlineCode,
    NodeKind::List,
    NodeKind::ListItem,
    NodeKind::Link,
    NodeKind::LinkReference,
    NodeKind::Table,
    NodeKind::TableRow,
    NodeKind::TableCell,
];

/// Reduce every table cell to a single period-terminated sentence, or to
/// nothing when the cell holds fewer than [`MIN_PROSE_WORDS`] words.
pub fn flatten_table_cells(mut tree: Node) -> Node {
    visit(&mut tree, &[NodeKind::TableCell], |cell| {
        let mut text = cell.plain_text();
        if !text.ends_with('.') {
            text.push('.');
        }
        let children = if word_count(&text) < MIN_PROSE_WORDS {
            Vec::new()
        } else {
            vec![Node::text(text)]
        };
        Step::SpliceAndSkip(vec![Node::parent(NodeKind::TableCell, children)])
    });
    tree
}

/// Remove inline code spans that hold a URL.
pub fn strip_url_inline_code(mut tree: Node) -> Node {
    visit(&mut tree, &[NodeKind::InlineCode], |code| {
        match code.value.as_deref() {
            Some(value) if URL_PATTERN.is_match(value) => Step::remove(),
            _ => Step::Skip,
        }
    });
    tree
}

/// Blank text that starts with an admonition directive marker.
pub fn strip_admonition_markers(mut tree: Node) -> Node {
    visit(&mut tree, &[NodeKind::Text], |text| {
        if text
            .value
            .as_deref()
            .is_some_and(|v| v.starts_with(ADMONITION_MARKER))
        {
            text.value = Some(String::new());
        }
        Step::Skip
    });
    tree
}

/// Turn every colon into a period so label-style clauses end sentences.
pub fn colons_to_periods(mut tree: Node) -> Node {
    visit(&mut tree, &[NodeKind::Text], |text| {
        if let Some(value) = text.value.as_mut() {
            if value.contains(':') {
                *value = value.replace(':', ".");
            }
        }
        Step::Skip
    });
    tree
}

/// Reduce list item paragraphs to plain text and blank the short ones.
pub fn drop_short_list_items(mut tree: Node) -> Node {
    visit(&mut tree, &[NodeKind::ListItem], |item| {
        for paragraph in item.children.iter_mut().filter(|c| c.is(NodeKind::Paragraph)) {
            let text = paragraph.plain_text();
            let text = if word_count(&text) < MIN_PROSE_WORDS {
                String::new()
            } else {
                text
            };
            paragraph.children = vec![Node::text(text)];
        }
        Step::Descend
    });
    tree
}

/// End every non-empty list item paragraph with a period.
pub fn terminate_list_items(mut tree: Node) -> Node {
    visit(&mut tree, &[NodeKind::ListItem], |item| {
        for paragraph in item.children.iter_mut().filter(|c| c.is(NodeKind::Paragraph)) {
            if let Some(value) = last_text_mut(paragraph).and_then(|t| t.value.as_mut()) {
                if !value.is_empty() && !value.ends_with('.') {
                    value.push('.');
                }
            }
        }
        Step::Descend
    });
    tree
}

fn last_text_mut(node: &mut Node) -> Option<&mut Node> {
    if node.is(NodeKind::Text) {
        return Some(node);
    }
    node.children.iter_mut().rev().find_map(last_text_mut)
}

/// Delete headings, code blocks, raw markup and images outright.
pub fn remove_non_prose(mut tree: Node) -> Node {
    visit(&mut tree, NON_PROSE_KINDS, |_| Step::remove());
    tree
}

/// Clear the alt text of any image still in the tree.
pub fn clear_image_alt(mut tree: Node) -> Node {
    visit(
        &mut tree,
        &[NodeKind::Image, NodeKind::ImageReference],
        |image| {
            image.value = Some(String::new());
            Step::Skip
        },
    );
    tree
}

/// Remove a leading front matter block delimited by two thematic breaks,
/// or a lone leading thematic break when there is no closing one.
pub fn remove_frontmatter(mut tree: Node) -> Node {
    let opens_with_break = tree
        .children
        .first()
        .is_some_and(|first| first.is(NodeKind::ThematicBreak));
    if !opens_with_break {
        return tree;
    }

    let closing = tree
        .children
        .iter()
        .skip(1)
        .position(|node| node.is(NodeKind::ThematicBreak))
        .map(|offset| offset + 1);

    match closing {
        Some(end) => {
            tree.children.drain(..=end);
        }
        None => {
            tree.children.remove(0);
        }
    }
    tree
}

/// Replace formatting, list, link and table wrappers with their children.
pub fn unwrap_inline(mut tree: Node) -> Node {
    visit(&mut tree, UNWRAPPED_KINDS, |node| {
        Step::Splice(std::mem::take(&mut node.children))
    });
    tree
}
