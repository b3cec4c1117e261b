// Browser launcher
// Opens the server root in the platform's default browser

use std::io;
use std::net::SocketAddr;

/// URL a browser should open to reach the root document
pub fn root_url(addr: &SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}/", addr.port())
    } else {
        format!("http://{addr}/")
    }
}

/// Launch the default browser at `url` without waiting for it
pub fn open_browser(url: &str) -> io::Result<()> {
    open::that_detached(url)
}
