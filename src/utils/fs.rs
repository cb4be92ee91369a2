use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::utils::error::{IoResultExt, Result};

/// Create a directory and any parent directories if they don't exist
pub fn mkdir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir).at(dir)?;
    }
    Ok(())
}

/// Remove `dir` and all its contents; a missing path is not an error.
///
/// A file or symlink at `dir` is removed itself, never followed.
pub fn remove_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    match fs::symlink_metadata(dir) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(dir).at(dir),
        Ok(_) => fs::remove_file(dir).at(dir),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).at(dir),
    }
}

/// List regular files under `dir` recursively, in file-name order.
///
/// Only files whose extension is one of `exts` (without the dot) are
/// returned; an empty `exts` returns every file.
pub fn files<P: AsRef<Path>>(dir: P, exts: &[&str]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            crate::utils::error::GenError::io(path, source)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        if !exts.is_empty() && !has_extension(entry.path(), exts) {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

/// Extension of `path` without the dot, or an empty string
pub fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

fn has_extension(path: &Path, exts: &[&str]) -> bool {
    let ext = extension(path);
    exts.iter().any(|e| *e == ext)
}

/// Recursively copy the contents of `src` into `dst`, preserving relative paths
pub fn copy_dir_contents<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<usize> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    let mut copied = 0;

    for path in files(src, &[])? {
        let target = dst.join(relative(&path, src));
        copy_file(&path, &target)?;
        copied += 1;
    }

    Ok(copied)
}

/// Copy a file, creating the destination's parent directories.
/// Any existing file at `to` is overwritten.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<u64> {
    let (from, to) = (from.as_ref(), to.as_ref());
    debug!("Copying file from {} to {}", from.display(), to.display());

    if let Some(parent) = to.parent() {
        mkdir(parent)?;
    }

    fs::copy(from, to).at(from)
}

/// Path of `path` relative to `base`; `path` is returned as-is if it
/// is not under `base`
pub fn relative<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}
