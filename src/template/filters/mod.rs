mod content;

use liquid::ParserBuilder;

pub use content::ContentFilterParser;

/// Register the page helper filters
pub fn register_filters(parser_builder: ParserBuilder) -> ParserBuilder {
    parser_builder.filter(ContentFilterParser)
}
