use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Common result type for gen operations
pub type Result<T> = std::result::Result<T, GenError>;

/// Broad category of a failure, used to tell failures apart without
/// matching on message text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing source directories, no templates, bad `gen.yml`
    Config,
    /// Frontmatter, required fields, template references, formats
    Parse,
    /// Template execution or minification
    Render,
    /// Filesystem access
    Io,
    /// Preview server listener
    Server,
}

/// Errors raised while splitting and decoding a frontmatter block
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("no frontmatter detected")]
    NotDetected,

    #[error("closing frontmatter delimiter not found")]
    Unterminated,

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Error types for gen operations
#[derive(Debug, Error)]
pub enum GenError {
    #[error("{}: does not exist, this directory is required", .0.display())]
    MissingDirectory(PathBuf),

    #[error("no templates found in {}", .0.display())]
    NoTemplates(PathBuf),

    #[error("{}: failed to parse template: {source}", path.display())]
    TemplateParse {
        path: PathBuf,
        #[source]
        source: liquid::Error,
    },

    #[error("{}: failed to parse frontmatter: {source}", path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("{}: the template {template:?} specified is not defined", path.display())]
    TemplateNotDefined { path: PathBuf, template: String },

    #[error("{}: missing required frontmatter parameter (title, template, uri)", path.display())]
    MissingParameter { path: PathBuf },

    #[error("{}: format {extension:?} is not supported", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("{uri}: failed to render template: {source}")]
    Render {
        uri: String,
        #[source]
        source: liquid::Error,
    },

    #[error("{}: failed to minify: {message}", path.display())]
    Minify { path: PathBuf, message: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("{}: directory exists and is not empty, use --force to write into it", .0.display())]
    DirectoryNotEmpty(PathBuf),

    #[error("server error: {0}")]
    Server(#[source] io::Error),
}

impl GenError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        GenError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            GenError::MissingDirectory(_)
            | GenError::NoTemplates(_)
            | GenError::TemplateParse { .. }
            | GenError::Config { .. }
            | GenError::DirectoryNotEmpty(_) => ErrorKind::Config,
            GenError::FrontMatter { .. }
            | GenError::TemplateNotDefined { .. }
            | GenError::MissingParameter { .. }
            | GenError::UnsupportedFormat { .. } => ErrorKind::Parse,
            GenError::Render { .. } | GenError::Minify { .. } => ErrorKind::Render,
            GenError::Io { .. } => ErrorKind::Io,
            GenError::Server(_) => ErrorKind::Server,
        }
    }
}

/// Attach the offending path to an I/O result
pub trait IoResultExt<T> {
    fn at(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, io::Error> {
    fn at(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| GenError::io(path, e))
    }
}
