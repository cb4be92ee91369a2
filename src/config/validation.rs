use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::utils::error::{GenError, Result};

/// Check that a site can be built from `config`: the `pages/` and
/// `templates/` directories exist and the destination does not contain
/// the source, which every build wipes
pub fn validate_config(config: &Config) -> Result<()> {
    require_dir(&config.pages_dir())?;
    require_dir(&config.templates_dir())?;
    validate_destination(config)?;
    Ok(())
}

fn require_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(GenError::MissingDirectory(dir.to_path_buf()))
    }
}

fn validate_destination(config: &Config) -> Result<()> {
    let source = absolute(&config.source);
    let destination = absolute(&config.destination);

    if source.starts_with(&destination) {
        return Err(GenError::Config {
            path: config.destination.clone(),
            message: format!(
                "destination would overwrite the source directory {}",
                config.source.display()
            ),
        });
    }

    Ok(())
}

fn absolute(path: &Path) -> PathBuf {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    // drop `.` components so `./site` and `site` compare equal
    path.components().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use tempfile::TempDir;

    fn site(dirs: &[&str]) -> (TempDir, Config) {
        let tmp = TempDir::new().unwrap();
        for dir in dirs {
            std::fs::create_dir_all(tmp.path().join(dir)).unwrap();
        }
        let config = Config {
            source: tmp.path().to_path_buf(),
            destination: tmp.path().join("site"),
            ..Config::default()
        };
        (tmp, config)
    }

    #[test]
    fn test_valid_layout() {
        let (_tmp, config) = site(&["pages", "templates"]);
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_missing_pages() {
        let (_tmp, config) = site(&["templates"]);
        match validate_config(&config).unwrap_err() {
            GenError::MissingDirectory(dir) => assert!(dir.ends_with("pages")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_templates() {
        let (_tmp, config) = site(&["pages", "static"]);
        match validate_config(&config).unwrap_err() {
            GenError::MissingDirectory(dir) => assert!(dir.ends_with("templates")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_destination_over_source() {
        let (tmp, mut config) = site(&["pages", "templates"]);
        config.destination = tmp.path().join(".");

        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
