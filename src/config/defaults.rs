use std::path::PathBuf;

/// Site settings file looked up at the source root
pub const CONFIG_FILE: &str = "gen.yml";

pub const PAGES_DIR: &str = "pages";
pub const TEMPLATES_DIR: &str = "templates";
pub const STATIC_DIR: &str = "static";

/// Custom not-found page at the destination root
pub const NOT_FOUND_PAGE: &str = "404.html";

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("site")
}

/// Default preview server address
pub fn default_addr() -> String {
    "localhost:3000".to_string()
}
