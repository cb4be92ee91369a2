//! Minification keyed by MIME type.
//!
//! Every supported type maps to a pure transform over bytes; adding a
//! format means adding a row to [`MINIFIERS`]. Structured syntax types
//! ending in `+json` (web manifests, JSON-LD) share the JSON minifier.

use std::path::Path;

use minify_html::Cfg;

/// A pure minifying transform
pub type MinifyFn = fn(&[u8]) -> Result<Vec<u8>, String>;

/// MIME essence to minifier
const MINIFIERS: &[(&str, MinifyFn)] = &[
    ("text/html", html),
    ("image/svg+xml", svg),
    ("text/css", css),
    ("text/javascript", js),
    ("application/javascript", js),
    ("application/x-javascript", js),
    ("application/ecmascript", js),
    ("application/json", json),
];

/// Look up the minifier registered for a MIME type
pub fn for_mime(mime: &str) -> Option<MinifyFn> {
    MINIFIERS
        .iter()
        .find(|(essence, _)| *essence == mime)
        .map(|(_, minify)| *minify)
        .or_else(|| mime.ends_with("+json").then_some(json as MinifyFn))
}

/// Look up the minifier for a file, guessing its MIME type from the extension
pub fn for_path(path: &Path) -> Option<MinifyFn> {
    let mime = mime_guess::from_path(path).first()?;
    for_mime(mime.essence_str())
}

/// Minify an HTML document, keeping `<html>`/`<head>` and closing tags
pub fn html(input: &[u8]) -> Result<Vec<u8>, String> {
    let mut cfg = Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.minify_css = true;
    Ok(minify_html::minify(input, &cfg))
}

/// Minify a standalone SVG document as markup in the SVG namespace
fn svg(input: &[u8]) -> Result<Vec<u8>, String> {
    let mut cfg = Cfg::new();
    cfg.keep_closing_tags = true;
    Ok(minify_html::minify(input, &cfg))
}

fn css(input: &[u8]) -> Result<Vec<u8>, String> {
    let source = as_str(input)?;
    minifier::css::minify(source)
        .map(|minified| minified.to_string().into_bytes())
        .map_err(|e| e.to_string())
}

fn js(input: &[u8]) -> Result<Vec<u8>, String> {
    let source = as_str(input)?;
    Ok(minifier::js::minify(source).to_string().into_bytes())
}

fn json(input: &[u8]) -> Result<Vec<u8>, String> {
    let source = as_str(input)?;
    Ok(minifier::json::minify(source).to_string().into_bytes())
}

fn as_str(input: &[u8]) -> Result<&str, String> {
    std::str::from_utf8(input).map_err(|e| format!("not valid UTF-8: {e}"))
}
