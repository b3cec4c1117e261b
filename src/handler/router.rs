//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: picks the proxy route, the root
//! redirect, or the static file route, and turns handler errors into responses.

use crate::config::AppState;
use crate::handler::{proxy, static_files};
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::request::Parts;
use hyper::{Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
///
/// The request body is never read.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let (parts, _body) = req.into_parts();
    Ok(route_request(&parts, &state).await)
}

/// Route request based on path; only the proxy route filters by method
async fn route_request(parts: &Parts, state: &AppState) -> Response<Full<Bytes>> {
    let path = parts.uri.path();

    let result = if path == state.config.proxy.path {
        proxy::serve_proxy(&parts.method, parts.uri.query(), &state.upstream).await
    } else if path == "/" {
        Ok(static_files::serve_root(&state.config.files.index_path))
    } else {
        static_files::serve_file(path, &state.files).await
    };

    result.unwrap_or_else(|err| {
        if err.is_server_error() {
            logger::log_error(&format!("{} {path}: {err}", parts.method));
        } else {
            logger::log_debug(&format!("{} {path}: {err}", parts.method));
        }
        http::build_error_response(&err, state.config.server.debug)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::upstream::tests::spawn_upstream;
    use http_body_util::BodyExt;
    use hyper::Method;

    fn state_for(root: &std::path::Path) -> Arc<AppState> {
        let mut cfg = Config::load_from("does-not-exist/devserve").unwrap();
        cfg.files.root = root.to_string_lossy().into_owned();
        cfg.proxy.use_env_proxy = false;
        Arc::new(AppState::new(&cfg).unwrap())
    }

    fn request(method: Method, uri: &str) -> Request<()> {
        Request::builder().method(method).uri(uri).body(()).unwrap()
    }

    async fn send(state: &Arc<AppState>, method: Method, uri: &str) -> (u16, hyper::HeaderMap, Bytes) {
        let resp = handle_request(request(method, uri), Arc::clone(state))
            .await
            .unwrap();
        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, headers, body)
    }

    #[tokio::test]
    async fn test_root_redirects_even_without_index() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());

        for method in [Method::GET, Method::POST, Method::HEAD] {
            let (status, headers, _) = send(&state, method, "/").await;
            assert_eq!(status, 302);
            assert_eq!(headers["location"], "/index.html");
        }
    }

    #[tokio::test]
    async fn test_index_scenario() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>hi</h1>").unwrap();
        let state = state_for(dir.path());

        let (status, headers, _) = send(&state, Method::GET, "/").await;
        assert_eq!(status, 302);
        assert_eq!(headers["location"], "/index.html");

        let (status, headers, body) = send(&state, Method::GET, "/index.html").await;
        assert_eq!(status, 200);
        assert_eq!(headers["content-type"], "text/html");
        assert_eq!(body, "<h1>hi</h1>");
    }

    #[tokio::test]
    async fn test_static_files_any_method() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets/sub dir")).unwrap();
        std::fs::write(dir.path().join("assets/style.css"), "body{}").unwrap();
        std::fs::write(dir.path().join("assets/sub dir/blob.bin9"), [9u8, 8, 7]).unwrap();
        let state = state_for(dir.path());

        let (status, headers, body) = send(&state, Method::POST, "/assets/style.css").await;
        assert_eq!(status, 200);
        assert_eq!(headers["content-type"], "text/css");
        assert_eq!(body, "body{}");

        let (status, headers, body) = send(&state, Method::GET, "/assets/sub%20dir/blob.bin9").await;
        assert_eq!(status, 200);
        assert!(headers.get("content-type").is_none());
        assert_eq!(body.as_ref(), &[9u8, 8, 7]);
    }

    #[tokio::test]
    async fn test_missing_file_and_directory_are_404() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        let state = state_for(dir.path());

        let (status, _, _) = send(&state, Method::GET, "/nothing.html").await;
        assert_eq!(status, 404);
        let (status, _, _) = send(&state, Method::GET, "/assets").await;
        assert_eq!(status, 404);
    }

    #[tokio::test]
    async fn test_proxy_relays_body_not_status() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());
        let upstream = spawn_upstream(500, r#"{"err":true}"#).await;

        let uri = format!("/proxy?url=http://{upstream}/data.json");
        let (status, _, body) = send(&state, Method::GET, &uri).await;
        assert_eq!(status, 200);
        assert_eq!(body, r#"{"err":true}"#);
    }

    #[tokio::test]
    async fn test_proxy_encoded_url() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());
        let upstream = spawn_upstream(200, "payload").await;

        let uri = format!("/proxy?url=http%3A%2F%2F{upstream}%2Fa%3Fb%3Dc");
        let (status, _, body) = send(&state, Method::GET, &uri).await;
        assert_eq!(status, 200);
        assert_eq!(body, "payload");
    }

    #[tokio::test]
    async fn test_proxy_rejects_non_get() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());

        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let (status, _, body) = send(&state, method, "/proxy?url=http://127.0.0.1:1/").await;
            assert_eq!(status, 400);
            assert!(body.is_empty());
        }
    }

    #[tokio::test]
    async fn test_proxy_fetch_failures_are_server_errors() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for(dir.path());

        let (status, _, _) = send(&state, Method::GET, "/proxy").await;
        assert_eq!(status, 502);

        let (status, _, body) = send(&state, Method::GET, "/proxy?url=ftp://example.test/x").await;
        assert_eq!(status, 502);
        assert!(String::from_utf8_lossy(&body).contains("upstream fetch failed"));
    }
}
