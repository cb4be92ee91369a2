use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::defaults;

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Site source root holding `pages/`, `templates/` and `static/`
    pub source: PathBuf,

    /// Output root, wiped and regenerated on every build
    pub destination: PathBuf,

    /// Minify generated pages and static assets
    pub minify: bool,

    /// Suppress progress messages
    pub quiet: bool,

    /// Emit per-file debug messages
    pub verbose: bool,

    /// Preview server address
    pub addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            minify: false,
            quiet: false,
            verbose: false,
            addr: defaults::default_addr(),
        }
    }
}

impl Config {
    pub fn pages_dir(&self) -> PathBuf {
        self.source.join(defaults::PAGES_DIR)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.source.join(defaults::TEMPLATES_DIR)
    }

    pub fn static_dir(&self) -> PathBuf {
        self.source.join(defaults::STATIC_DIR)
    }

    pub fn config_file(&self) -> PathBuf {
        self.source.join(defaults::CONFIG_FILE)
    }

    /// Layer the keys present in a site's `gen.yml` over these settings.
    ///
    /// A relative `destination` is taken relative to the source root.
    pub fn merge_file(&mut self, file: FileConfig) {
        if let Some(destination) = file.destination {
            self.destination = resolve(&self.source, destination);
        }
        if let Some(minify) = file.minify {
            self.minify = minify;
        }
        if let Some(quiet) = file.quiet {
            self.quiet = quiet;
        }
        if let Some(addr) = file.addr {
            self.addr = addr;
        }
    }

    /// Layer command-line settings over everything else
    pub fn merge_overrides(&mut self, overrides: Overrides) {
        if let Some(destination) = overrides.destination {
            self.destination = destination;
        }
        if let Some(addr) = overrides.addr {
            self.addr = addr;
        }
        self.minify |= overrides.minify;
        self.quiet |= overrides.quiet;
        self.verbose |= overrides.verbose;
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Settings a site can pin in `gen.yml`
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub destination: Option<PathBuf>,
    pub minify: Option<bool>,
    pub quiet: Option<bool>,
    pub addr: Option<String>,
}

/// Settings given on the command line; unset flags leave lower layers alone
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub destination: Option<PathBuf>,
    pub addr: Option<String>,
    pub minify: bool,
    pub quiet: bool,
    pub verbose: bool,
}
