use std::fs;
use std::path::Path;

use liquid::model::Value;
use liquid::Object;
use log::debug;

use super::model::Page;
use crate::minify;
use crate::template::TemplateRegistry;
use crate::utils::error::{GenError, IoResultExt, Result};
use crate::utils::fs::mkdir;

/// Render `page` through its template and write it under `dst`,
/// minifying the HTML when `minify` is set
pub fn generate(page: &Page, templates: &TemplateRegistry, dst: &Path, minify: bool) -> Result<()> {
    let target = page.output_path(dst);
    if let Some(parent) = target.parent() {
        mkdir(parent)?;
    }

    let render_error = |source| GenError::Render {
        uri: page.uri.clone(),
        source,
    };

    let mut globals = Object::new();
    globals.insert("page".into(), Value::Object(page.to_liquid().map_err(render_error)?));
    let rendered = templates.render(&page.template, &globals).map_err(render_error)?;

    let output = if minify {
        minify::html(rendered.as_bytes()).map_err(|message| GenError::Minify {
            path: target.clone(),
            message,
        })?
    } else {
        rendered.into_bytes()
    };

    fs::write(&target, output).at(&target)?;
    debug!("Wrote {} from {}", target.display(), page.source.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use tempfile::TempDir;

    const LAYOUT: &str = "<!doctype html>\n<html>\n  <head>\n    <title>{{ page.title | escape }}</title>\n  </head>\n  <body>\n    {{ page | content }}\n  </body>\n</html>\n";

    fn registry(root: &Path, layout: &str) -> TemplateRegistry {
        let dir = root.join("templates");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("layout.liquid"), layout).unwrap();
        TemplateRegistry::parse_dir(&dir).unwrap()
    }

    fn page(uri: &str) -> Page {
        Page {
            uri: uri.to_string(),
            title: "Hello".to_string(),
            template: "layout".to_string(),
            content: "<p>Hello, world!</p>\n".to_string(),
            ..Page::default()
        }
    }

    #[test]
    fn test_generate_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let templates = registry(tmp.path(), LAYOUT);
        let dst = tmp.path().join("site");

        generate(&page("hello/index.html"), &templates, &dst, false).unwrap();

        let written = std::fs::read_to_string(dst.join("hello/index.html")).unwrap();
        assert!(written.contains("<title>Hello</title>"));
        assert!(written.contains("<p>Hello, world!</p>"));
    }

    #[test]
    fn test_generate_truncates_existing_file() {
        let tmp = TempDir::new().unwrap();
        let templates = registry(tmp.path(), "{{ page.title }}");
        let dst = tmp.path().join("site");
        std::fs::create_dir_all(&dst).unwrap();
        std::fs::write(dst.join("index.html"), "a much longer previous body").unwrap();

        generate(&page("index.html"), &templates, &dst, false).unwrap();

        assert_eq!(std::fs::read_to_string(dst.join("index.html")).unwrap(), "Hello");
    }

    #[test]
    fn test_generate_minified() {
        let tmp = TempDir::new().unwrap();
        let templates = registry(tmp.path(), LAYOUT);
        let dst = tmp.path().join("site");

        generate(&page("index.html"), &templates, &dst, false).unwrap();
        let plain = std::fs::read(dst.join("index.html")).unwrap();
        generate(&page("index.html"), &templates, &dst, true).unwrap();
        let minified = std::fs::read_to_string(dst.join("index.html")).unwrap();

        assert!(minified.len() < plain.len());
        assert!(minified.contains("<p>Hello, world!</p>"));
        assert!(!minified.contains("\n  "));
    }

    #[test]
    fn test_render_error_carries_uri() {
        let tmp = TempDir::new().unwrap();
        let templates = registry(tmp.path(), "{{ site.undefined }}");
        let dst = tmp.path().join("site");

        let err = generate(&page("broken.html"), &templates, &dst, false).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Render);
        match err {
            GenError::Render { uri, .. } => assert_eq!(uri, "broken.html"),
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dst.join("broken.html").exists());
    }
}
