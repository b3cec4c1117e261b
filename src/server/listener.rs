// Listener module
// Binds the TCP listener, walking up to the next free port when asked to

use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::logger;

/// Create a `TcpListener` with `SO_REUSEADDR` enabled.
///
/// `SO_REUSEADDR` lets a restarted dev server rebind a port still in
/// `TIME_WAIT`; a port held by a live listener still fails with `AddrInUse`.
pub fn create_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

/// Bind `addr`, trying up to `retries` following ports while the port is taken
pub fn bind_with_retries(addr: SocketAddr, retries: u16) -> io::Result<TcpListener> {
    let mut candidate = addr;
    let mut remaining = retries;

    loop {
        match create_listener(candidate) {
            Err(e) if e.kind() == io::ErrorKind::AddrInUse && remaining > 0 => {
                logger::log_bind_retry(&candidate, &e);
                let Some(next) = candidate.port().checked_add(1) else {
                    return Err(e);
                };
                candidate.set_port(next);
                remaining -= 1;
            }
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_binds_ephemeral_port() {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_occupied_port_without_retries_fails() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();

        let err = bind_with_retries(addr, 0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AddrInUse);
    }

    #[tokio::test]
    async fn test_occupied_port_moves_on() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();

        let listener = bind_with_retries(addr, 10).unwrap();
        let bound = listener.local_addr().unwrap();
        assert!(bound.port() > addr.port());
        assert!(bound.port() <= addr.port() + 10);
    }
}
