//! # Server List Model
//!
//! Defines [`ServerRecord`] and the loader for the JSON server list.
//!
//! The list is read once at startup and stays immutable for the rest of
//! the run. File order is preserved and determines report line order.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// One monitored endpoint from the server list.
///
/// JSON keys are accepted in PascalCase (`Name`) and lowercase (`name`)
/// form; serialization writes PascalCase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerRecord {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Address", alias = "address")]
    pub address: String,
    #[serde(rename = "Port", alias = "port")]
    pub port: u16,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read server list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server list {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and decodes the server list at `path`.
///
/// There is no recovery here: a missing or malformed file is fatal for
/// the caller, which aborts before producing any report.
pub fn load_servers(path: &Path) -> Result<Vec<ServerRecord>, LoadError> {
    let contents: String = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let servers: Vec<ServerRecord> =
        serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    debug!("loaded {} servers from {}", servers.len(), path.display());
    Ok(servers)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
