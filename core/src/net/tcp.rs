//! # Connectivity Probe
//!
//! A plain TCP handshake against `address:port`. Tests whether the
//! service port accepts connections, independent of ICMP reachability.

use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::warn;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Attempts a TCP handshake with `address:port`.
///
/// `true` iff the connect completes within [`CONNECT_TIMEOUT`]. Refused,
/// unreachable, timed-out and unresolvable targets all log and become
/// `false`. The stream is scoped to this call and closed on every exit
/// path before the function returns.
pub async fn handshake_probe(address: &str, port: u16) -> bool {
    let target: String = format!("{address}:{port}");

    match timeout(CONNECT_TIMEOUT, TcpStream::connect(target.as_str())).await {
        Ok(Ok(_stream)) => true,
        Ok(Err(err)) => {
            warn!("connection to {target} failed: {err}");
            false
        }
        Err(_elapsed) => {
            warn!("connection to {target} timed out after {CONNECT_TIMEOUT:?}");
            false
        }
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
