mod builder;
mod static_files;

use std::path::{Path, PathBuf};

use log::debug;

use crate::builder::page::Page;
use crate::config::{validate_config, Config};
use crate::server;
use crate::template::TemplateRegistry;
use crate::utils::error::Result;

/// A site source tree together with its compiled templates.
///
/// Constructing a `Site` validates the source layout and compiles every
/// template, so a `Site` that exists is always buildable as far as
/// configuration goes. Pages are collected by [`Site::build`].
pub struct Site {
    src: PathBuf,
    dst: PathBuf,
    pages_dir: PathBuf,
    static_dir: PathBuf,
    quiet: bool,
    minify: bool,
    templates: TemplateRegistry,
    pages: Vec<Page>,
}

impl Site {
    pub fn from_config(config: &Config) -> Result<Self> {
        validate_config(config)?;

        let templates = TemplateRegistry::parse_dir(&config.templates_dir())?;
        debug!(
            "Compiled {} templates: {}",
            templates.len(),
            templates.names().collect::<Vec<_>>().join(", ")
        );

        Ok(Site {
            src: config.source.clone(),
            dst: config.destination.clone(),
            pages_dir: config.pages_dir(),
            static_dir: config.static_dir(),
            quiet: config.quiet,
            minify: config.minify,
            templates,
            pages: Vec::new(),
        })
    }

    pub fn destination(&self) -> &Path {
        &self.dst
    }

    /// Build the site, then serve the destination until interrupted
    pub async fn serve(&mut self, addr: &str) -> Result<()> {
        self.build()?;
        server::serve(&self.dst, addr).await
    }
}
