//! HTTP response building module
//!
//! Provides builders for each status the server emits, decoupled from the handlers.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::error::ServeError;

/// Build 200 response carrying file bytes
///
/// `Content-Type` is only set when a type was determined.
pub fn build_file_response(data: Vec<u8>, content_type: Option<&str>) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(200)
        .header("Content-Length", data.len());

    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }

    builder.body(Full::new(Bytes::from(data))).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 200 response relaying a fetched body verbatim
pub fn build_relay_response(body: Bytes) -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Content-Length", body.len())
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 302 redirect response
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(302)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Redirecting...")))
        .unwrap_or_else(|e| {
            log_build_error("302", &e);
            Response::new(Full::new(Bytes::from("Redirecting...")))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 400 Bad Request response with an empty body
pub fn build_400_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(400)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("400", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a server error response
///
/// With `debug` the error text goes into the body, otherwise only the status reason.
pub fn build_server_error_response(status: StatusCode, detail: &str, debug: bool) -> Response<Full<Bytes>> {
    let reason = status.canonical_reason().unwrap_or("Server Error");
    let body = if debug {
        format!("{} {reason}\n\n{detail}", status.as_u16())
    } else {
        format!("{} {reason}", status.as_u16())
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Map a handler error onto its response
pub fn build_error_response(err: &ServeError, debug: bool) -> Response<Full<Bytes>> {
    match err {
        ServeError::NotFound => build_404_response(),
        ServeError::MethodNotAllowed(_) => build_400_response(),
        _ => build_server_error_response(err.status(), &err.to_string(), debug),
    }
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
