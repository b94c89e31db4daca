//! # Reachability Probe
//!
//! One ICMP echo request per call, issued through the system `ping`
//! utility so the check works without raw-socket privileges.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;
use tracing::warn;

/// Upper bound on the whole probe, including process startup and name
/// resolution. The echo wait passed to `ping` itself is shorter.
const PROBE_DEADLINE: Duration = Duration::from_secs(10);

/// Sends a single echo request to `address`.
///
/// Returns `true` only on a successful reply. Every failure mode, from
/// a missing `ping` binary to an unresolvable name, is logged and
/// collapses to `false`; the caller never sees an error.
pub async fn echo_probe(address: &str) -> bool {
    let mut cmd: Command = Command::new("ping");
    #[cfg(unix)]
    cmd.args(["-c", "1", "-W", "4", address]);
    #[cfg(windows)]
    cmd.args(["-n", "1", "-w", "4000", address]);

    cmd.stdout(Stdio::null()).stderr(Stdio::null());

    match timeout(PROBE_DEADLINE, cmd.status()).await {
        Ok(Ok(status)) => status.success(),
        Ok(Err(err)) => {
            warn!("ping to {address} could not run: {err}");
            false
        }
        Err(_elapsed) => {
            warn!("ping to {address} gave no result within {PROBE_DEADLINE:?}");
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
