//! Scripted block stripping.
//!
//! A scripted block is the stretch of top-level content between two raw
//! markup nodes whose value equals the configured marker. Every paragraph
//! inside the block is blanked, up to the closing marker.

use crate::document::{visit, Node, NodeKind, Step};

/// Default raw markup literal that opens and closes a scripted block.
pub const DEFAULT_SCRIPT_MARKER: &str = "<!--script-->";

/// Position of a top-level scan relative to scripted blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptBlockState {
    #[default]
    Outside,
    Inside,
}

impl ScriptBlockState {
    /// State after seeing `node`. Only raw markup equal to `marker` toggles.
    pub fn next(self, node: &Node, marker: &str) -> Self {
        let is_marker = node.is(NodeKind::Html) && node.value.as_deref() == Some(marker);
        match (is_marker, self) {
            (false, state) => state,
            (true, ScriptBlockState::Outside) => ScriptBlockState::Inside,
            (true, ScriptBlockState::Inside) => ScriptBlockState::Outside,
        }
    }
}

/// Blank the text and inline code of every top-level paragraph that sits
/// inside a scripted block.
pub fn strip_script_blocks(mut tree: Node, marker: &str) -> Node {
    let mut state = ScriptBlockState::default();
    for child in tree.children.iter_mut() {
        state = state.next(child, marker);
        if state == ScriptBlockState::Inside && child.is(NodeKind::Paragraph) {
            blank_literals(child);
        }
    }
    tree
}

fn blank_literals(paragraph: &mut Node) {
    visit(paragraph, &[NodeKind::Text, NodeKind::InlineCode], |node| {
        node.value = Some(String::new());
        Step::Skip
    });
}
