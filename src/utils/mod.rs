pub mod error;
pub mod fs;
pub mod version;

pub use error::FrontMatterError;
