mod core;
mod loader;

pub use self::core::{FilesConfig, ReadabilityConfig, CONFIG_FILE_NAME};
pub use loader::{
    default_config_toml, directory_ancestors, load_config_from, parse_and_validate_config,
};
