//! Score command handler

use anyhow::{Context as _, Result};
use std::path::Path;

use super::resolve_config;
use crate::cli::args::{OutputArgs, SelectionArgs};
use crate::io::{self, DocumentWalker, PathFilter};
use crate::metrics::TextStatistics;
use crate::output::render_snapshot;
use crate::snapshot::SnapshotScorer;

pub fn handle_score_command(
    path: &Path,
    selection: &SelectionArgs,
    output: &OutputArgs,
    parallel: bool,
) -> Result<()> {
    let config = resolve_config(path, selection)?;
    let filter = PathFilter::new(&config.files.pattern, &config.files.exclude)?;

    let documents = DocumentWalker::new(path.to_path_buf(), filter)
        .load()
        .with_context(|| format!("Failed to load documents under {}", path.display()))?;

    let snapshot = SnapshotScorer::new(&config.normalize, &TextStatistics)
        .with_parallel(parallel)
        .score_documents(&documents)?;

    let rendered = render_snapshot(&snapshot, output.format)?;
    io::write_output(&rendered, output.output.as_deref())?;
    Ok(())
}
