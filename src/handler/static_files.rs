//! Static file serving module
//!
//! Serves files under the root directory for any method, and redirects `/`
//! to the index document.

use crate::error::ServeError;
use crate::handler::resolver::FileResolver;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Redirect the root path, whether or not the target exists
pub fn serve_root(index_path: &str) -> Response<Full<Bytes>> {
    http::build_redirect_response(index_path)
}

/// Serve the file at a raw (still percent-encoded) request path
pub async fn serve_file(
    path: &str,
    resolver: &FileResolver,
) -> Result<Response<Full<Bytes>>, ServeError> {
    let decoded = http::decode_path(path).ok_or(ServeError::NotFound)?;
    let file = resolver.resolve(&decoded).await?;

    logger::log_file_served(&file.path, file.content_type);
    Ok(http::build_file_response(file.content, file.content_type))
}
