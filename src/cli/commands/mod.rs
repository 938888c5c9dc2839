//! Command handlers

pub mod compare;
pub mod diff;
pub mod init;
pub mod score;

pub use compare::handle_compare_command;
pub use diff::handle_diff_command;
pub use init::handle_init_command;
pub use score::handle_score_command;

use anyhow::{Context as _, Result};
use std::path::Path;

use crate::cli::args::SelectionArgs;
use crate::config::{load_config_from, ReadabilityConfig};

/// Load the config nearest to `start` and apply the command-line overrides.
pub(crate) fn resolve_config(start: &Path, selection: &SelectionArgs) -> Result<ReadabilityConfig> {
    let start = start
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", start.display()))?;
    let selection = selection.clone();
    let config = load_config_from(start).with_overrides(
        selection.pattern,
        selection.exclude,
        selection.script_marker,
    );
    config.validate()?;
    Ok(config)
}
