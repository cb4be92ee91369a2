use comrak::Options;

/// Comrak options for page bodies: GitHub-flavoured extensions, raw HTML kept
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;

    // Page authors write HTML inline next to Markdown
    options.render.unsafe_ = true;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str, options: &Options<'_>) -> String {
    comrak::markdown_to_html(content, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comrak_rendering() {
        let options = create_comrak_options();
        let html = render_markdown("# Hello, World!\n\nThis is a **bold** statement.", &options);

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let options = create_comrak_options();
        let html = render_markdown("<div class=\"note\">hi</div>\n", &options);

        assert_eq!(html, "<div class=\"note\">hi</div>\n");
    }

    #[test]
    fn test_gfm_table() {
        let options = create_comrak_options();
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n", &options);

        assert!(html.contains("<table>"));
    }
}
