use std::fmt;
use std::time::Instant;

use log::info;

use super::static_files::copy_static;
use super::Site;
use crate::builder::page::{formats, generate, parse_page};
use crate::utils::error::Result;
use crate::utils::fs::{files, mkdir, remove_dir};

impl Site {
    /// Regenerate the destination tree from scratch.
    ///
    /// Every page is parsed before any is written, so a broken source
    /// aborts the build before page output starts.
    pub fn build(&mut self) -> Result<()> {
        let start = Instant::now();
        self.pages.clear();

        self.progress(format_args!(
            "Building {} into {}",
            self.src.display(),
            self.dst.display()
        ));

        self.clean()?;
        mkdir(&self.dst)?;

        if self.static_dir.is_dir() {
            let copied = copy_static(&self.static_dir, &self.dst, self.minify)?;
            self.progress(format_args!("Copied {} static files", copied));
        }

        let sources = files(&self.pages_dir, &formats::extensions())?;
        for source in &sources {
            let page = parse_page(&self.templates, source)?;
            self.pages.push(page);
        }

        for page in &self.pages {
            generate(page, &self.templates, &self.dst, self.minify)?;
        }

        self.progress(format_args!(
            "Generated {} pages in {:.2?}",
            self.pages.len(),
            start.elapsed()
        ));
        Ok(())
    }

    /// Remove the destination tree; nothing to do if it does not exist
    pub fn clean(&self) -> Result<()> {
        remove_dir(&self.dst)
    }

    fn progress(&self, message: fmt::Arguments<'_>) {
        if !self.quiet {
            info!("{}", message);
        }
    }
}
