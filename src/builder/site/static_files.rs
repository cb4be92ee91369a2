use std::fs;
use std::path::Path;

use log::debug;

use crate::minify;
use crate::utils::error::{GenError, IoResultExt, Result};
use crate::utils::fs::{copy_dir_contents, copy_file, files, mkdir, relative};

/// Mirror the static directory into `dst`.
///
/// With `minify` set, every file whose MIME type has a registered
/// minifier is written minified; all others are copied byte for byte.
/// Returns the number of files written.
pub fn copy_static(static_dir: &Path, dst: &Path, minify: bool) -> Result<usize> {
    if !minify {
        return copy_dir_contents(static_dir, dst);
    }

    let sources = files(static_dir, &[])?;
    for source in &sources {
        let target = dst.join(relative(source, static_dir));
        if let Some(parent) = target.parent() {
            mkdir(parent)?;
        }

        match minify::for_path(source) {
            Some(minifier) => {
                let input = fs::read(source).at(source)?;
                let output = minifier(&input).map_err(|message| GenError::Minify {
                    path: source.clone(),
                    message,
                })?;
                fs::write(&target, output).at(&target)?;
                debug!("Minified {} -> {}", source.display(), target.display());
            }
            None => {
                copy_file(source, &target)?;
            }
        }
    }

    Ok(sources.len())
}
