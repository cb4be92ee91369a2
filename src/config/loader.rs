use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::types::{Config, FileConfig, Overrides};
use crate::utils::error::{GenError, IoResultExt, Result};

/// Resolve the settings for a site rooted at `source`: built-in defaults,
/// then the site's `gen.yml` if it has one, then `overrides`
pub fn load_config<P: AsRef<Path>>(source: P, overrides: Overrides) -> Result<Config> {
    let mut config = Config {
        source: source.as_ref().to_path_buf(),
        ..Config::default()
    };

    let path = config.config_file();
    if path.is_file() {
        debug!("Loading configuration from {}", path.display());
        config.merge_file(read_config_file(&path)?);
    } else {
        debug!("No {} found, using defaults", path.display());
    }

    config.merge_overrides(overrides);

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Parse a `gen.yml` file; an empty file pins nothing
fn read_config_file(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path).at(path)?;
    parse_config(&content, path.to_path_buf())
}

fn parse_config(content: &str, path: PathBuf) -> Result<FileConfig> {
    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GenError::Config {
        path,
        message: format!("invalid configuration: {}", e),
    })
}
