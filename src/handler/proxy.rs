//! Fetch proxy module
//!
//! `GET /proxy?url=<target>` fetches the target server-side and relays its
//! body with status 200. The upstream status is deliberately not propagated.

use crate::error::ServeError;
use crate::http;
use crate::logger;
use crate::upstream::UpstreamClient;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};

/// Serve one proxy request
///
/// A missing `url` parameter is not rejected here; the fetch fails instead.
pub async fn serve_proxy(
    method: &Method,
    query: Option<&str>,
    upstream: &UpstreamClient,
) -> Result<Response<Full<Bytes>>, ServeError> {
    if method != Method::GET {
        return Err(ServeError::MethodNotAllowed(method.clone()));
    }

    let url = http::query_param(query, "url");
    let fetched = upstream.fetch(url.as_deref()).await?;

    let target = url.as_deref().unwrap_or_default();
    logger::log_fetched(target, fetched.body.len());
    if !fetched.status.is_success() {
        logger::log_debug(&format!(
            "[Proxy] Upstream answered {}, relaying as 200",
            fetched.status
        ));
    }

    Ok(http::build_relay_response(fetched.body))
}
