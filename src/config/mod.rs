mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/scorecard/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("scorecard")
}

/// Get the default config file path (~/.config/scorecard/scorecard.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("scorecard.yaml")
}

/// Load configuration from a YAML file.
///
/// An explicit `path` must exist. The default path is optional: when the file
/// is absent the built-in calibration applies and an empty config is returned.
///
/// # Errors
///
/// Returns an error if an explicitly named file does not exist, cannot be
/// read, or does not parse as YAML.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}
