pub mod git;
pub mod walker;

pub use git::GitRepository;
pub use walker::{DocumentWalker, PathFilter};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::core::errors::{Error, Result};

/// `/`-joined form of a relative path, used as a document's name.
pub fn document_name(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_system("Failed to read file", path, e))
}

/// Load a JSON document such as a stored snapshot or change-set.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write rendered output to a file, or to stdout when no path is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .map_err(|e| Error::file_system("Failed to write output", path, e)),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
