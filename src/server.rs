// src/server.rs
use std::io;
use std::net::{IpAddr, SocketAddr};

use tokio::net::TcpListener;

/// Ports tried after the configured one when it is already taken.
pub const PORT_ATTEMPTS: u16 = 20;

/// Binds `port`, or the first free one among the next [`PORT_ATTEMPTS`].
pub async fn bind_listener(host: IpAddr, port: u16) -> io::Result<(TcpListener, SocketAddr)> {
    let mut last_err = None;
    for candidate in port..=port.saturating_add(PORT_ATTEMPTS) {
        let addr = SocketAddr::new(host, candidate);
        match TcpListener::bind(addr).await {
            Ok(listener) => return Ok((listener, addr)),
            Err(e) => {
                tracing::debug!(%addr, error=%e, "Bind failed");
                last_err = Some(e);
            }
        }
    }
    Err(last_err.unwrap_or_else(|| io::Error::from(io::ErrorKind::AddrInUse)))
}
