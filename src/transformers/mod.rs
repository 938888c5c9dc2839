//! Document normalization.
//!
//! A [`Pipeline`] is an ordered list of tree transformers. Running it over a
//! parsed document, serializing the result and applying the two text
//! cleanups in [`clean_text`] yields the plain prose that gets scored.

pub mod passes;
pub mod script_block;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::errors::Result;
use crate::document::{self, Node};

pub use script_block::{strip_script_blocks, ScriptBlockState, DEFAULT_SCRIPT_MARKER};

pub type Transformer<T> = Box<dyn Fn(T) -> T + Send + Sync>;

static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());
static WRAPPED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Za-z])\n").unwrap());

/// Options that change what the normalizer treats as non-prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Raw markup literal that opens and closes a scripted block.
    #[serde(default = "default_script_marker")]
    pub script_marker: String,
}

fn default_script_marker() -> String {
    DEFAULT_SCRIPT_MARKER.to_string()
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            script_marker: default_script_marker(),
        }
    }
}

struct NamedPass {
    name: &'static str,
    transform: Transformer<Node>,
}

/// Ordered sequence of structural passes.
pub struct Pipeline {
    passes: Vec<NamedPass>,
}

impl Pipeline {
    /// The standard pass order. Later passes assume earlier ones ran.
    pub fn standard(options: &NormalizeOptions) -> Self {
        let marker = options.script_marker.clone();
        Self::new()
            .with_pass("flatten-table-cells", passes::flatten_table_cells)
            .with_pass("strip-url-inline-code", passes::strip_url_inline_code)
            .with_pass("strip-admonition-markers", passes::strip_admonition_markers)
            .with_pass("colons-to-periods", passes::colons_to_periods)
            .with_pass("drop-short-list-items", passes::drop_short_list_items)
            .with_pass("terminate-list-items", passes::terminate_list_items)
            .with_pass("strip-script-blocks", move |tree| {
                strip_script_blocks(tree, &marker)
            })
            .with_pass("remove-non-prose", passes::remove_non_prose)
            .with_pass("clear-image-alt", passes::clear_image_alt)
            .with_pass("remove-frontmatter", passes::remove_frontmatter)
            .with_pass("unwrap-inline", passes::unwrap_inline)
    }

    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn with_pass<F>(mut self, name: &'static str, pass: F) -> Self
    where
        F: Fn(Node) -> Node + Send + Sync + 'static,
    {
        self.passes.push(NamedPass {
            name,
            transform: Box::new(pass),
        });
        self
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name).collect()
    }

    /// Run every pass in order.
    pub fn apply(&self, tree: Node) -> Node {
        self.passes.iter().fold(tree, |acc, pass| {
            log::trace!("Running normalization pass {}", pass.name);
            (pass.transform)(acc)
        })
    }

    /// Parse, transform, serialize and clean one document.
    pub fn normalize(&self, name: &str, text: &str) -> Result<String> {
        let tree = document::parse(name, text)?;
        let serialized = document::serialize(&self.apply(tree));
        Ok(clean_text(&serialized))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard(&NormalizeOptions::default())
    }
}

/// Collapse newline runs, then join lines that were wrapped mid-sentence.
///
/// Blanked blocks still serialize as empty lines, so a newline left at the
/// start of the text is dropped as well.
pub fn clean_text(serialized: &str) -> String {
    let collapsed = NEWLINE_RUNS.replace_all(serialized, "\n");
    let joined = WRAPPED_LINE.replace_all(&collapsed, "${1} ");
    joined.trim_start_matches('\n').to_string()
}

/// Normalize one document with the standard pipeline.
pub fn normalize(name: &str, text: &str, options: &NormalizeOptions) -> Result<String> {
    Pipeline::standard(options).normalize(name, text)
}
