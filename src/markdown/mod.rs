pub mod engine;

use engine::{create_comrak_options, render_markdown};

/// Convert a Markdown document to HTML
pub fn markdownify(content: &str) -> String {
    render_markdown(content, &create_comrak_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdownify_paragraph() {
        assert_eq!(markdownify("Hello, world!\n"), "<p>Hello, world!</p>\n");
    }
}
