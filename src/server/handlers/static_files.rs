use std::io;
use std::path::{Path, PathBuf};

use axum::handler::HandlerWithoutStateExt;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use log::{debug, error};
use tower_http::services::ServeDir;

use crate::config::defaults::NOT_FOUND_PAGE;

/// Body sent for unknown paths when the site has no custom 404 page
pub const DEFAULT_NOT_FOUND: &str = "404 page not found";

/// Serve `directory` as static files, answering unknown paths with the
/// site's own `404.html`
pub fn create_static_files_handler(directory: PathBuf) -> Router {
    let root = directory.clone();
    let not_found = move || {
        let root = root.clone();
        async move { handle_not_found(&root).await }
    };

    let serve_dir = ServeDir::new(&directory).not_found_service(not_found.into_service());
    Router::new().fallback_service(serve_dir)
}

/// Respond with the custom 404 page if the site has one
pub async fn handle_not_found(root_dir: &Path) -> Response {
    let custom_404 = root_dir.join(NOT_FOUND_PAGE);

    match tokio::fs::read(&custom_404).await {
        Ok(content) => {
            debug!("Using custom 404 page: {}", custom_404.display());
            (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                content,
            )
                .into_response()
        }
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                error!("Error reading {}: {}", custom_404.display(), e);
            }
            (StatusCode::NOT_FOUND, DEFAULT_NOT_FOUND).into_response()
        }
    }
}
