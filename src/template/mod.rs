pub mod filters;
pub mod tags;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use liquid::partials::{EagerCompiler, InMemorySource};
use liquid::{Object, Parser, ParserBuilder, Template};
use log::debug;

use crate::utils::error::{GenError, IoResultExt, Result};
use crate::utils::fs;
use crate::utils::version::VERSION;

/// Extension of template files under `templates/`
pub const TEMPLATE_EXT: &str = "liquid";

type Partials = EagerCompiler<InMemorySource>;

/// All compiled templates of a site, addressed by name.
///
/// A template's name is its path relative to the templates directory,
/// without extension and with `/` separators (`layout`, `partials/head`).
/// Every template is also available to the others as a partial, so
/// `{% include "partials/head" %}` works regardless of load order.
pub struct TemplateRegistry {
    templates: BTreeMap<String, Template>,
}

impl TemplateRegistry {
    /// Load and compile every template under `dir`
    pub fn parse_dir(dir: &Path) -> Result<Self> {
        let paths = fs::files(dir, &[TEMPLATE_EXT])?;
        if paths.is_empty() {
            return Err(GenError::NoTemplates(dir.to_path_buf()));
        }

        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let source = std::fs::read_to_string(&path).at(&path)?;
            let name = template_name(dir, &path);
            debug!("Loaded template {} from {}", name, path.display());
            sources.push((name, path, source));
        }

        Self::compile(dir, sources)
    }

    /// Compile `(name, path, source)` triples into one registry; the
    /// first syntax error aborts with the offending file's path
    fn compile(dir: &Path, sources: Vec<(String, PathBuf, String)>) -> Result<Self> {
        // Syntax-check each file on its own first, so a broken template is
        // reported by path rather than as a failure of the partial store
        let checker = create_parser(Partials::empty()).map_err(|source| GenError::TemplateParse {
            path: dir.to_path_buf(),
            source,
        })?;
        for (_, path, source) in &sources {
            checker.parse(source).map_err(|source| GenError::TemplateParse {
                path: path.clone(),
                source,
            })?;
        }

        let mut partials = Partials::empty();
        for (name, _, source) in &sources {
            partials.add(name.clone(), source.clone());
        }

        let parser = create_parser(partials).map_err(|source| GenError::TemplateParse {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut templates = BTreeMap::new();
        for (name, path, source) in sources {
            let template = parser
                .parse(&source)
                .map_err(|source| GenError::TemplateParse { path, source })?;
            templates.insert(name, template);
        }

        Ok(TemplateRegistry { templates })
    }

    /// Check whether a template with this name was loaded
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Execute the named template against `globals`
    pub fn render(&self, name: &str, globals: &Object) -> std::result::Result<String, liquid::Error> {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| liquid::Error::with_msg(format!("template {:?} is not defined", name)))?;
        template.render(globals)
    }
}

/// Build the Liquid parser with the stdlib, the page helpers and all
/// site templates as partials
fn create_parser(partials: Partials) -> std::result::Result<Parser, liquid::Error> {
    let parser_builder = ParserBuilder::with_stdlib();
    let parser_builder = filters::register_filters(parser_builder);
    let parser_builder = tags::register_tags(parser_builder, VERSION);

    parser_builder.partials(partials).build()
}

fn template_name(dir: &Path, path: &Path) -> String {
    let rel = fs::relative(path, dir).with_extension("");
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
