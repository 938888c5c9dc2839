use std::fs;
use std::path::{Path, PathBuf};

use super::core::{ReadabilityConfig, CONFIG_FILE_NAME};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a config file's contents and check its globs.
pub fn parse_and_validate_config(contents: &str) -> Result<ReadabilityConfig, String> {
    let config = toml::from_str::<ReadabilityConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<ReadabilityConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

// "Not found" is the normal case while walking up.
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` of them.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file. The nearest file
/// wins. An invalid file is skipped with a warning.
pub fn load_config_from(start: PathBuf) -> ReadabilityConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH + 1)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!("No {} found. Using default config.", CONFIG_FILE_NAME);
            ReadabilityConfig::default()
        })
}

/// Contents written by `init`.
pub fn default_config_toml() -> &'static str {
    r#"# Readability configuration

[files]
# Glob of the documents forming one snapshot
pattern = "**/*.md"
# Globs removed from the discovered set
exclude = []

[normalize]
# Raw markup line that opens and closes a scripted block
script_marker = "<!--script-->"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_toml_parses_to_defaults() {
        let config = parse_and_validate_config(default_config_toml()).unwrap();
        assert_eq!(config, ReadabilityConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_and_validate_config("[files]\nexclude = [\"drafts/**\"]\n").unwrap();
        assert_eq!(config.files.pattern, "**/*.md");
        assert_eq!(config.files.exclude, vec!["drafts/**"]);
    }

    #[test]
    fn test_invalid_glob_rejected() {
        let err = parse_and_validate_config("[files]\npattern = \"[\"\n").unwrap_err();
        assert!(err.contains("Invalid glob"));
    }

    #[test]
    fn test_empty_script_marker_rejected() {
        assert!(parse_and_validate_config("[normalize]\nscript_marker = \"\"\n").is_err());
    }

    #[test]
    fn test_directory_ancestors_limit() {
        let start: PathBuf = ["/", "a", "b", "c"].iter().collect();
        let dirs: Vec<PathBuf> = directory_ancestors(start, 2).collect();
        assert_eq!(dirs.len(), 2);
        assert!(dirs[1].ends_with("b"));
    }

    #[test]
    fn test_load_config_from_ancestor() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[files]\npattern = \"docs/**/*.md\"\n",
        )
        .unwrap();
        let nested = dir.path().join("one/two");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.files.pattern, "docs/**/*.md");
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        assert_eq!(
            load_config_from(dir.path().to_path_buf()),
            ReadabilityConfig::default()
        );
    }
}
