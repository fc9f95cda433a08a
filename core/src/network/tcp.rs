use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use sweepr_common::scanning::ReachabilityProbe;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Unprivileged probe: a TCP handshake against a single port.
///
/// A refused connection still proves that something answered at that
/// address, so both outcomes count as reachable. Only silence does not.
pub struct HandshakeProbe {
    port: u16,
}

impl HandshakeProbe {
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

#[async_trait]
impl ReachabilityProbe for HandshakeProbe {
    async fn probe(&self, target: Ipv4Addr, probe_timeout: Duration) -> anyhow::Result<bool> {
        let socket_addr: SocketAddr = SocketAddr::new(IpAddr::V4(target), self.port);

        match timeout(probe_timeout, TcpStream::connect(socket_addr)).await {
            Ok(Ok(_stream)) => Ok(true),
            Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => Ok(true),
            Ok(Err(e)) => Err(e.into()),
            Err(_elapsed) => Ok(false),
        }
    }

    fn name(&self) -> String {
        format!("tcp/{}", self.port)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
