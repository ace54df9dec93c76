use crate::types::AppConfig;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_ICONS_DIR: &str = "src/assets/icons";
const ENV_PREFIX: &str = "ICON_BG_STRIP";

#[derive(Debug, Deserialize)]
struct SerializedAppConfig {
    icons_dir: String,
}

fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from(""))
        .join(".config/icon-bg-strip/config.toml")
}

fn load_config(config_path: &Path) -> Result<SerializedAppConfig, config::ConfigError> {
    let mut builder = ConfigBuilder::<DefaultState>::default()
        .set_default("icons_dir", DEFAULT_ICONS_DIR)?;

    if config_path.exists() {
        builder = builder.add_source(File::from(config_path).required(false));
    }

    let config = builder
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()?;

    config.try_deserialize()
}

/// Resolve where the icons live: built-in default, then the user config file,
/// then `ICON_BG_STRIP_ICONS_DIR`.
pub fn init() -> Result<AppConfig, config::ConfigError> {
    let config_path = default_config_path();
    let config = load_config(&config_path)?;

    log::debug!(
        "icons dir `{}` (config file: {})",
        config.icons_dir,
        config_path.display()
    );

    Ok(AppConfig {
        icons_dir: PathBuf::from(config.icons_dir),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn falls_back_to_default_dir() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.icons_dir, DEFAULT_ICONS_DIR);
    }

    #[test]
    fn config_file_overrides_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "icons_dir = \"/srv/app/icons\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.icons_dir, "/srv/app/icons");
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "icons_dir = [").unwrap();

        assert!(load_config(&path).is_err());
    }
}
