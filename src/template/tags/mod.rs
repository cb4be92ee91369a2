mod version;
mod year;

use liquid::ParserBuilder;

pub use version::VersionTag;
pub use year::YearTag;

/// Register the `year` and `version` helper tags
pub fn register_tags(parser_builder: ParserBuilder, version: &str) -> ParserBuilder {
    parser_builder
        .tag(YearTag)
        .tag(VersionTag::new(version))
}
