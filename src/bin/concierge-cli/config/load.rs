use std::fs;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::paths::ConfigPaths;
use super::types::AppConfig;

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub paths: ConfigPaths,
}

/// Read the TOML file (if any), then layer `.env` and process environment
/// variables on top.
pub fn load_config(path_override: Option<PathBuf>) -> Result<LoadedConfig, ConfigError> {
    let paths = ConfigPaths::resolve(path_override)?;
    fs::create_dir_all(&paths.logs_dir)?;
    let mut config = read_config(&paths.config_file)?;

    dotenvy::dotenv().ok();
    config.apply_env(|name| std::env::var(name).ok());

    Ok(LoadedConfig { config, paths })
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(err) => Err(ConfigError::Io(err)),
    }
}
