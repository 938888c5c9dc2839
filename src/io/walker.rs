use glob::{MatchOptions, Pattern};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use super::document_name;
use crate::core::errors::{Error, Result};
use crate::snapshot::Document;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Include glob plus exclude globs, matched against `/`-separated
/// document names.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: Pattern,
    exclude: Vec<Pattern>,
}

impl PathFilter {
    pub fn new(pattern: &str, exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: Pattern::new(pattern)?,
            exclude: exclude
                .iter()
                .map(|p| Pattern::new(p))
                .collect::<std::result::Result<_, _>>()?,
        })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.include.matches_with(name, MATCH_OPTIONS)
            && !self
                .exclude
                .iter()
                .any(|p| p.matches_with(name, MATCH_OPTIONS))
    }
}

/// Discovers the documents of a working tree.
pub struct DocumentWalker {
    root: PathBuf,
    filter: PathFilter,
}

impl DocumentWalker {
    pub fn new(root: PathBuf, filter: PathFilter) -> Self {
        Self { root, filter }
    }

    /// Names of matching files relative to the root, sorted. Files ignored
    /// by `.gitignore` are skipped.
    pub fn discover(&self) -> Result<Vec<String>> {
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .filter_entry(|entry| entry.file_name() != ".git")
            .build();

        let mut names = Vec::new();
        for entry in walker {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = relative_name(&self.root, path) {
                if self.filter.matches(&name) {
                    names.push(name);
                }
            }
        }

        names.sort();
        log::info!(
            "Discovered {} documents under {}",
            names.len(),
            self.root.display()
        );
        Ok(names)
    }

    /// Read every discovered document.
    pub fn load(&self) -> Result<Vec<Document>> {
        self.discover()?
            .into_iter()
            .map(|name| -> Result<Document> {
                let path = self.root.join(&name);
                let text = std::fs::read_to_string(&path)
                    .map_err(|e| Error::file_system("Failed to read document", &path, e))?;
                Ok(Document::new(name, text))
            })
            .collect()
    }
}

fn relative_name(root: &Path, path: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(document_name)
}
