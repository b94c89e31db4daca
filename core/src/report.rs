//! # Report Runner
//!
//! A report section applies one probe across the whole server list and
//! renders one entry per server. Both the probe and the line format are
//! passed in, so the same runner produces every section of the report.

use std::future::Future;

use servdoc_common::server::ServerRecord;

const SEPARATOR: &str = "==============================";

/// Builds one titled report section.
///
/// `check` runs once per server, strictly in input order, each call
/// awaited to completion before the next starts. `format_line` turns a
/// server and its boolean outcome into the printed entry. No error
/// handling happens here; the probes swallow their own failures.
pub async fn run_section<C, Fut, F>(
    title: &str,
    servers: &[ServerRecord],
    mut check: C,
    format_line: F,
) -> String
where
    C: FnMut(ServerRecord) -> Fut,
    Fut: Future<Output = bool>,
    F: Fn(&ServerRecord, bool) -> String,
{
    let mut section: String = String::new();
    section.push_str(SEPARATOR);
    section.push('\n');
    section.push_str(title);
    section.push('\n');
    section.push_str(SEPARATOR);
    section.push('\n');

    for server in servers {
        let success: bool = check(server.clone()).await;
        section.push_str(&format_line(server, success));
        section.push('\n');
    }

    section
}

/// Entry format of the reachability section.
pub fn ping_line(server: &ServerRecord, success: bool) -> String {
    format!(
        "{}:\n - Ping to {} was {}",
        server.name,
        server.address,
        outcome(success)
    )
}

/// Entry format of the connectivity section.
pub fn connect_line(server: &ServerRecord, success: bool) -> String {
    format!(
        "{}:\n - Connection to {} over port {} was {}",
        server.name,
        server.address,
        server.port,
        outcome(success)
    )
}

fn outcome(success: bool) -> &'static str {
    if success { "OK" } else { "FAILED" }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
