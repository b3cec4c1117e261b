// Connection handling module
// Serves one TCP connection per task and writes the access log

use http_body_util::Full;
use hyper::body::{Body, Bytes, Incoming};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::config::AppState;
use crate::handler;
use crate::logger::{self, AccessLogEntry};

/// Handle a single connection in a spawned task.
///
/// Requests on the connection are served one after another (HTTP/1.1
/// keep-alive); connections never share anything but the read-only state.
pub fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let mut builder = http1::Builder::new();
        builder.keep_alive(state.config.server.keep_alive);

        let conn = builder.serve_connection(
            io,
            service_fn(move |req| serve_logged(req, peer_addr, Arc::clone(&state))),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}

/// Route the request and record it in the access log
async fn serve_logged(
    req: Request<Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let entry = state
        .config
        .logging
        .access_log
        .then(|| AccessLogEntry::start(peer_addr, &req));
    let started = Instant::now();

    let response = handler::handle_request(req, Arc::clone(&state)).await?;

    if let Some(mut entry) = entry {
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.elapsed = started.elapsed();
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}
