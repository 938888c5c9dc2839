use anyhow::Result;
use std::path::Path;

use crate::config::{default_config_toml, CONFIG_FILE_NAME};

/// Write the default config into `dir`.
pub fn handle_init_command(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, default_config_toml())?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
