//! Index-aware tree traversal.
//!
//! A visitor receives each matching node and answers with a [`Step`] that
//! says where scanning continues. Replacements are spliced into the
//! parent's child list at the visited index, so sibling indices stay valid
//! and a removed node is never descended into.

use super::{Node, NodeKind};

/// What the traversal does after a node has been visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Visit the node's children, then continue with the next sibling.
    Descend,
    /// Leave the node's subtree alone and continue with the next sibling.
    Skip,
    /// Replace the node with these nodes and resume scanning at the same
    /// index, so the replacements are visited too. An empty list removes
    /// the node.
    Splice(Vec<Node>),
    /// Replace the node with these nodes and continue after them.
    SpliceAndSkip(Vec<Node>),
}

impl Step {
    pub fn remove() -> Self {
        Step::Splice(Vec::new())
    }
}

/// Visit every descendant of `root` whose kind is in `kinds`, in document
/// order. Non-matching nodes are descended into.
///
/// The root itself is never visited and never replaced.
pub fn visit<F>(root: &mut Node, kinds: &[NodeKind], mut visitor: F)
where
    F: FnMut(&mut Node) -> Step,
{
    walk_children(root, &mut |node: &mut Node| {
        if kinds.contains(&node.kind) {
            visitor(node)
        } else {
            Step::Descend
        }
    });
}

fn walk_children<F>(parent: &mut Node, visitor: &mut F)
where
    F: FnMut(&mut Node) -> Step,
{
    let mut index = 0;
    while index < parent.children.len() {
        match visitor(&mut parent.children[index]) {
            Step::Descend => {
                walk_children(&mut parent.children[index], visitor);
                index += 1;
            }
            Step::Skip => index += 1,
            Step::Splice(replacement) => {
                parent.children.splice(index..=index, replacement);
            }
            Step::SpliceAndSkip(replacement) => {
                let inserted = replacement.len();
                parent.children.splice(index..=index, replacement);
                index += inserted;
            }
        }
    }
}
