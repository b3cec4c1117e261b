// Server module entry point
// Binds the listener, optionally opens a browser, and accepts connections until killed

pub mod browser;
pub mod connection;
pub mod listener;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::{AppState, Config};
use crate::logger;

pub use listener::{bind_with_retries, create_listener};

/// Start the dev server described by `config`
///
/// Only returns on a startup failure; the accept loop runs until the process is terminated.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.get_socket_addr()?;
    let listener = bind_with_retries(addr, config.server.port_retries)?;
    let bound = listener.local_addr()?;

    let state = Arc::new(AppState::new(&config)?);
    logger::log_server_start(&bound, &config);

    if config.server.auto_open {
        let url = browser::root_url(&bound);
        match browser::open_browser(&url) {
            Ok(()) => logger::log_browser_opened(&url),
            Err(e) => logger::log_warning(&format!("Failed to open browser at {url}: {e}")),
        }
    }

    serve(listener, state).await;
    Ok(())
}

/// Accept loop, one task per connection
pub async fn serve(listener: TcpListener, state: Arc<AppState>) {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                logger::log_debug(&format!("[Connection] Accepted from: {peer_addr}"));
                connection::handle_connection(stream, peer_addr, Arc::clone(&state));
            }
            Err(e) => logger::log_error(&format!("Failed to accept connection: {e}")),
        }
    }
}
