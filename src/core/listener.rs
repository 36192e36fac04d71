use std::net::SocketAddr;
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, TcpKeepalive, Type};

const SOCKET_BUFFER_SIZE: usize = 256 * 1024;

/// Binds a non-blocking TCP listener with address reuse, `TCP_NODELAY`,
/// larger socket buffers and TCP keepalive.
pub fn bind(addr: SocketAddr, backlog: i32) -> std::io::Result<tokio::net::TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_send_buffer_size(SOCKET_BUFFER_SIZE)?;
    socket.set_tcp_keepalive(&keepalive())?;

    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(backlog)?;

    tokio::net::TcpListener::from_std(socket.into())
}

#[cfg(target_os = "linux")]
fn keepalive() -> TcpKeepalive {
    TcpKeepalive::new()
        .with_time(Duration::from_secs(60))
        .with_interval(Duration::from_secs(10))
        .with_retries(3)
}

#[cfg(not(target_os = "linux"))]
fn keepalive() -> TcpKeepalive {
    TcpKeepalive::new().with_time(Duration::from_secs(60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_binds_ephemeral_port() {
        let listener = bind("127.0.0.1:0".parse().unwrap(), 16).unwrap();
        let local = listener.local_addr().unwrap();
        assert!(local.ip().is_loopback());
        assert_ne!(local.port(), 0);
    }
}
