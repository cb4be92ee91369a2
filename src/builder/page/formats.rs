use crate::markdown::markdownify;

/// Canonical page extension; sources with it are literal HTML
pub const PAGE_EXT: &str = "html";

/// Markdown source extension
pub const MARKDOWN_EXT: &str = "md";

/// Turns a page body into HTML
pub type RenderFn = fn(&str) -> String;

const FORMATS: &[(&str, RenderFn)] = &[(PAGE_EXT, passthrough), (MARKDOWN_EXT, markdownify)];

/// Extensions of every supported page source
pub fn extensions() -> Vec<&'static str> {
    FORMATS.iter().map(|(ext, _)| *ext).collect()
}

/// Look up the body transform for a source extension
pub fn for_extension(extension: &str) -> Option<RenderFn> {
    FORMATS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, render)| *render)
}

fn passthrough(body: &str) -> String {
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert_eq!(extensions(), vec!["html", "md"]);
    }

    #[test]
    fn test_html_passes_through() {
        let render = for_extension("html").unwrap();
        assert_eq!(render("# not markdown\n"), "# not markdown\n");
    }

    #[test]
    fn test_markdown_is_rendered() {
        let render = for_extension("md").unwrap();
        assert_eq!(render("# Hello, world!\n"), "<h1>Hello, world!</h1>\n");
    }

    #[test]
    fn test_unknown_extension() {
        assert!(for_extension("txt").is_none());
        assert!(for_extension("").is_none());
        assert!(for_extension("HTML").is_none());
    }
}
