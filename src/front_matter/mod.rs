pub mod extractor;
pub mod parser;

pub use parser::parse;
