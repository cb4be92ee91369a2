//! Page sources: parsing them into [`Page`]s and writing the result.

pub mod formats;
mod model;
mod parser;
mod writer;

pub use model::Page;
pub use parser::parse_page;
pub use writer::generate;
