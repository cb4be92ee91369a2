//! Skeleton for `gen new`.
//!
//! The skeleton is compiled into the binary, so `new` works without any
//! files next to the executable.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::utils::error::{GenError, IoResultExt, Result};
use crate::utils::fs::mkdir;

/// Relative path and contents of every skeleton file
const FILES: &[(&str, &str)] = &[
    (".gitignore", include_str!("site/gitignore")),
    ("README.md", include_str!("site/README.md")),
    ("gen.yml", include_str!("site/gen.yml")),
    ("pages/index.md", include_str!("site/pages/index.md")),
    ("pages/404.html", include_str!("site/pages/404.html")),
    ("templates/layout.liquid", include_str!("site/templates/layout.liquid")),
    ("templates/partials/head.liquid", include_str!("site/templates/partials/head.liquid")),
    ("static/robots.txt", include_str!("site/static/robots.txt")),
    ("static/css/site.css", include_str!("site/static/css/site.css")),
];

/// Write a new site skeleton into `dst`, returning the created files.
///
/// `dst` may be missing or empty; a non-empty directory is only written
/// into with `force`, and then existing files of the same name are
/// overwritten.
pub fn create<P: AsRef<Path>>(dst: P, force: bool) -> Result<Vec<PathBuf>> {
    let dst = dst.as_ref();

    if dst.exists() && !force && !is_empty_dir(dst)? {
        return Err(GenError::DirectoryNotEmpty(dst.to_path_buf()));
    }

    let mut created = Vec::with_capacity(FILES.len());
    for (name, contents) in FILES {
        let path = dst.join(name);
        if let Some(parent) = path.parent() {
            mkdir(parent)?;
        }
        fs::write(&path, contents).at(&path)?;
        info!("Created {}", path.display());
        created.push(path);
    }

    Ok(created)
}

fn is_empty_dir(dir: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(dir).at(dir)?;
    Ok(entries.next().is_none())
}
