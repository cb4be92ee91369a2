use std::fs;
use std::path::Path;

use log::debug;

use super::formats;
use super::model::{normalize_uri, Page};
use crate::front_matter;
use crate::template::TemplateRegistry;
use crate::utils::error::{GenError, IoResultExt, Result};
use crate::utils::fs::extension;

/// Parse one page source into a [`Page`] with its body rendered to HTML.
///
/// The template reference is checked before the required fields, so a
/// page without a `template` key reports the empty name as undefined.
pub fn parse_page(templates: &TemplateRegistry, src: &Path) -> Result<Page> {
    let text = fs::read_to_string(src).at(src)?;

    let (mut page, body): (Page, String) =
        front_matter::parse(&text).map_err(|source| GenError::FrontMatter {
            path: src.to_path_buf(),
            source,
        })?;

    if !templates.contains(&page.template) {
        return Err(GenError::TemplateNotDefined {
            path: src.to_path_buf(),
            template: page.template,
        });
    }

    if page.title.is_empty() || page.template.is_empty() || page.uri.is_empty() {
        return Err(GenError::MissingParameter {
            path: src.to_path_buf(),
        });
    }

    page.uri = normalize_uri(&page.uri);

    let ext = extension(src);
    let render = formats::for_extension(ext).ok_or_else(|| GenError::UnsupportedFormat {
        path: src.to_path_buf(),
        extension: ext.to_string(),
    })?;

    page.content = render(&body);
    page.source = src.to_path_buf();

    debug!("Parsed {} -> {}", src.display(), page.uri);
    Ok(page)
}
