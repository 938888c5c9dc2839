//! Git-backed snapshots and change-sets
//!
//! A snapshot is the set of matching documents in the tree of one revision.
//! A change-set is the tree-to-tree diff between two revisions, with rename
//! detection, classified into added, modified and renamed documents.
//!
//! `git2::Repository` is not `Send`, so a fresh instance is opened for each
//! operation.

use git2::{
    Delta, DiffDelta, DiffFindOptions, ObjectType, Oid, Repository, Tree, TreeWalkMode,
    TreeWalkResult,
};
use std::path::{Path, PathBuf};

use super::document_name;
use super::walker::PathFilter;
use crate::comparison::{FileStatuses, Rename};
use crate::core::errors::{Error, Result};
use crate::snapshot::Document;

pub struct GitRepository {
    repo_path: PathBuf,
}

impl GitRepository {
    /// Open a repository, discovering the root from any subdirectory.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)?;
        let repo_path = repo
            .workdir()
            .unwrap_or_else(|| repo.path())
            .to_path_buf();
        log::debug!("Using git repository at {}", repo_path.display());
        Ok(Self { repo_path })
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    fn open_repo(&self) -> Result<Repository> {
        Ok(Repository::open(&self.repo_path)?)
    }

    /// Every matching document in the tree of `revision`, sorted by name.
    pub fn documents_at(&self, revision: &str, filter: &PathFilter) -> Result<Vec<Document>> {
        let repo = self.open_repo()?;
        let tree = resolve_tree(&repo, revision)?;

        let mut blobs: Vec<(String, Oid)> = Vec::new();
        tree.walk(TreeWalkMode::PreOrder, |dir, entry| {
            if entry.kind() == Some(ObjectType::Blob) {
                if let Some(file) = entry.name() {
                    let name = format!("{dir}{file}");
                    if filter.matches(&name) {
                        blobs.push((name, entry.id()));
                    }
                }
            }
            TreeWalkResult::Ok
        })?;
        blobs.sort_by(|a, b| a.0.cmp(&b.0));

        let documents = blobs
            .into_iter()
            .map(|(name, id)| -> Result<Document> {
                let blob = repo.find_blob(id)?;
                let text = std::str::from_utf8(blob.content())
                    .map_err(|e| Error::parse(&name, format!("not valid UTF-8: {e}")))?;
                Ok(Document::new(name, text))
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!("Found {} documents at {}", documents.len(), revision);
        Ok(documents)
    }

    /// Classify the documents changed between `base` and `head`.
    ///
    /// Deleted documents are not reported. A rename whose content also
    /// changed is reported both as renamed and as modified. A rename into
    /// the filter from a non-matching name counts as an addition.
    pub fn classify_changes(
        &self,
        base: &str,
        head: &str,
        filter: &PathFilter,
    ) -> Result<FileStatuses> {
        let repo = self.open_repo()?;
        let base_tree = resolve_tree(&repo, base)?;
        let head_tree = resolve_tree(&repo, head)?;

        let mut diff = repo.diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?;
        let mut find = DiffFindOptions::new();
        find.renames(true);
        diff.find_similar(Some(&mut find))?;

        let mut statuses = FileStatuses::default();
        for delta in diff.deltas() {
            classify_delta(&delta, filter, &mut statuses);
        }

        statuses.added.sort();
        statuses.modified.sort();
        statuses.renamed.sort_by(|a, b| a.to.cmp(&b.to));
        log::info!(
            "{}..{}: {} added, {} modified, {} renamed",
            base,
            head,
            statuses.added.len(),
            statuses.modified.len(),
            statuses.renamed.len()
        );
        Ok(statuses)
    }
}

fn resolve_tree<'r>(repo: &'r Repository, revision: &str) -> Result<Tree<'r>> {
    repo.revparse_single(revision)
        .and_then(|object| object.peel_to_tree())
        .map_err(|source| Error::Revision {
            revision: revision.to_string(),
            source,
        })
}

fn classify_delta(delta: &DiffDelta<'_>, filter: &PathFilter, statuses: &mut FileStatuses) {
    let new_name = delta.new_file().path().map(document_name);
    let old_name = delta.old_file().path().map(document_name);
    let Some(new_name) = new_name.filter(|name| filter.matches(name)) else {
        return;
    };

    match delta.status() {
        Delta::Added | Delta::Copied => statuses.added.push(new_name),
        Delta::Modified => statuses.modified.push(new_name),
        Delta::Renamed => match old_name.filter(|name| filter.matches(name)) {
            Some(old_name) => {
                if delta.old_file().id() != delta.new_file().id() {
                    statuses.modified.push(new_name.clone());
                }
                statuses.renamed.push(Rename::new(old_name, new_name));
            }
            None => statuses.added.push(new_name),
        },
        status => log::trace!("Ignoring {:?} change to {}", status, new_name),
    }
}
