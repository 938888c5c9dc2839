//! Diff command handler
//!
//! Builds a report from stored snapshots and a stored change-set, for
//! pipelines that score each revision in a separate step.

use anyhow::{Context as _, Result};
use std::path::Path;

use crate::cli::args::OutputArgs;
use crate::comparison::{report, FileStatuses, Readability};
use crate::io;
use crate::output::render_report;

pub fn handle_diff_command(
    old: &Path,
    new: &Path,
    changes: &Path,
    output: &OutputArgs,
) -> Result<()> {
    let old: Readability = io::read_json(old)
        .with_context(|| format!("Failed to load snapshot {}", old.display()))?;
    let new: Readability = io::read_json(new)
        .with_context(|| format!("Failed to load snapshot {}", new.display()))?;
    let statuses: FileStatuses = io::read_json(changes)
        .with_context(|| format!("Failed to load change-set {}", changes.display()))?;

    let report = report(&new, &old, &statuses);

    let rendered = render_report(&report, output.format)?;
    io::write_output(&rendered, output.output.as_deref())?;
    Ok(())
}
