use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::errors::{Error, Result};
use crate::transformers::NormalizeOptions;

pub const CONFIG_FILE_NAME: &str = ".readability.toml";

/// Root configuration structure, read from `.readability.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityConfig {
    /// Which files form a snapshot
    #[serde(default)]
    pub files: FilesConfig,

    /// Normalizer settings
    #[serde(default)]
    pub normalize: NormalizeOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Glob of the documents forming one snapshot
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Globs removed from the discovered set
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            exclude: Vec::new(),
        }
    }
}

fn default_pattern() -> String {
    "**/*.md".to_string()
}

impl ReadabilityConfig {
    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        pattern: Option<String>,
        exclude: Vec<String>,
        script_marker: Option<String>,
    ) -> Self {
        if let Some(pattern) = pattern {
            self.files.pattern = pattern;
        }
        if !exclude.is_empty() {
            self.files.exclude = exclude;
        }
        if let Some(marker) = script_marker {
            self.normalize.script_marker = marker;
        }
        self
    }

    /// Check that every glob compiles and the script marker is not empty.
    pub fn validate(&self) -> Result<()> {
        std::iter::once(&self.files.pattern)
            .chain(self.files.exclude.iter())
            .try_for_each(|pattern| {
                Pattern::new(pattern).map(|_| ()).map_err(|e| {
                    Error::Configuration(format!("Invalid glob '{}': {}", pattern, e))
                })
            })?;

        if self.normalize.script_marker.is_empty() {
            return Err(Error::Configuration(
                "normalize.script_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
