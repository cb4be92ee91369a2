//! Local preview server for a built site.

pub mod app;
pub mod core;
pub mod handlers;
pub mod middleware;

pub use self::core::serve;
