use std::path::PathBuf;
use std::time::Duration;

use axum::middleware;
use axum::Router;
use tower_http::timeout::TimeoutLayer;

use crate::server::handlers::create_static_files_handler;
use crate::server::middleware::log_request;

/// Upper bound on serving a single request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Router for previewing a built site rooted at `destination`
pub fn create_app(destination: PathBuf) -> Router {
    create_static_files_handler(destination)
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(middleware::from_fn(log_request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::handlers::static_files::DEFAULT_NOT_FOUND;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::path::Path;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn site() -> TempDir {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("hello")).unwrap();
        std::fs::write(tmp.path().join("index.html"), "<p>home</p>").unwrap();
        std::fs::write(tmp.path().join("hello/index.html"), "<p>hello</p>").unwrap();
        std::fs::write(tmp.path().join("robots.txt"), "User-agent: *\nAllow: /").unwrap();
        tmp
    }

    async fn get(root: &Path, uri: &str) -> (StatusCode, String) {
        let app = create_app(root.to_path_buf());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_serves_files() {
        let tmp = site();

        assert_eq!(get(tmp.path(), "/robots.txt").await, (StatusCode::OK, "User-agent: *\nAllow: /".to_string()));
        assert_eq!(get(tmp.path(), "/").await, (StatusCode::OK, "<p>home</p>".to_string()));
        assert_eq!(get(tmp.path(), "/hello/").await, (StatusCode::OK, "<p>hello</p>".to_string()));
    }

    #[tokio::test]
    async fn test_custom_not_found() {
        let tmp = site();
        std::fs::write(tmp.path().join("404.html"), "<h1>lost</h1>").unwrap();

        let (status, body) = get(tmp.path(), "/nowhere").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "<h1>lost</h1>");
    }

    #[tokio::test]
    async fn test_default_not_found() {
        let tmp = site();

        let (status, body) = get(tmp.path(), "/nowhere/at/all.css").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, DEFAULT_NOT_FOUND);
    }
}
