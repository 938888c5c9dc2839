//! Compare command handler
//!
//! Scores the documents of two git revisions and reports the documents the
//! change-set between them added or modified.

use anyhow::{Context as _, Result};
use std::path::Path;

use super::resolve_config;
use crate::cli::args::{OutputArgs, SelectionArgs};
use crate::comparison::Comparator;
use crate::io::{self, GitRepository, PathFilter};
use crate::metrics::TextStatistics;
use crate::output::render_report;
use crate::snapshot::SnapshotScorer;

pub fn handle_compare_command(
    repo: &Path,
    base: &str,
    head: &str,
    selection: &SelectionArgs,
    output: &OutputArgs,
    parallel: bool,
) -> Result<()> {
    let git = GitRepository::open(repo)
        .with_context(|| format!("Failed to open git repository at {}", repo.display()))?;
    let config = resolve_config(git.repo_path(), selection)?;
    let filter = PathFilter::new(&config.files.pattern, &config.files.exclude)?;
    let scorer = SnapshotScorer::new(&config.normalize, &TextStatistics).with_parallel(parallel);

    let old_documents = git.documents_at(base, &filter)?;
    let new_documents = git.documents_at(head, &filter)?;

    let old = scorer
        .score_documents(&old_documents)
        .with_context(|| format!("Failed to score {}", base))?;
    let new = scorer
        .score_documents(&new_documents)
        .with_context(|| format!("Failed to score {}", head))?;
    let statuses = git.classify_changes(base, head, &filter)?;

    let report = Comparator::new(&old, &new, &statuses).compare();

    let rendered = render_report(&report, output.format)?;
    io::write_output(&rendered, output.output.as_deref())?;
    Ok(())
}
