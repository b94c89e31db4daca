#![cfg(test)]
use std::fs;
use std::path::PathBuf;

use servdoc_common::server::{self, LoadError, ServerRecord};
use tempfile::TempDir;

/// End-to-end loader check against a real file on disk: record count,
/// field values and file order all survive the round trip.
#[test]
fn loading_preserves_count_order_and_fields() {
    let dir: TempDir = TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("servers.json");
    let body: &str = r#"[
        { "Name": "Web1", "Address": "10.0.0.5", "Port": 443 },
        { "Name": "DB1",  "Address": "db.internal", "Port": 5432 },
        { "name": "Cache1", "address": "10.0.0.9", "port": 6379 }
    ]"#;
    fs::write(&path, body).unwrap();

    let servers: Vec<ServerRecord> = server::load_servers(&path).unwrap();

    assert_eq!(servers.len(), 3);
    assert_eq!(
        servers[0],
        ServerRecord {
            name: "Web1".to_string(),
            address: "10.0.0.5".to_string(),
            port: 443,
        }
    );
    assert_eq!(servers[1].name, "DB1");
    assert_eq!(servers[1].address, "db.internal");
    assert_eq!(servers[2].port, 6379);
}

#[test]
fn reencoded_list_loads_back_identically() {
    let dir: TempDir = TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("servers.json");
    let original: Vec<ServerRecord> = vec![
        ServerRecord {
            name: "A".to_string(),
            address: "10.0.0.1".to_string(),
            port: 80,
        },
        ServerRecord {
            name: "B".to_string(),
            address: "10.0.0.2".to_string(),
            port: 8080,
        },
    ];
    fs::write(&path, serde_json::to_string(&original).unwrap()).unwrap();

    let reloaded: Vec<ServerRecord> = server::load_servers(&path).unwrap();

    assert_eq!(reloaded, original);
}

#[test]
fn missing_file_fails_before_any_report() {
    let dir: TempDir = TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("absent.json");

    let result = server::load_servers(&path);

    assert!(matches!(result, Err(LoadError::Io { .. })));
}

#[test]
fn malformed_json_fails_before_any_report() {
    let dir: TempDir = TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("servers.json");
    fs::write(&path, "{ not a list").unwrap();

    let result = server::load_servers(&path);

    assert!(matches!(result, Err(LoadError::Parse { .. })));
}
