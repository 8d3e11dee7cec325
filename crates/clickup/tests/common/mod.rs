//! Common test utilities and helpers

use std::path::Path;

use clickup::{Client, ClientConfig, Transport};
use wiremock::MockServer;

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Create a test credential
#[allow(dead_code)]
pub fn test_credential() -> String {
    "pk_12345678_TESTCREDENTIAL0123456789ABCDEF".to_string()
}

/// Configuration pointing at the mock server with the test credential
#[allow(dead_code)]
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::builder()
        .credential(test_credential())
        .base_url(server.uri())
        .user_agent("clickup-tests/1.0")
        .build()
}

/// Transport pointing at the mock server
#[allow(dead_code)]
pub fn transport_for(server: &MockServer) -> Transport {
    Transport::new(config_for(server)).expect("Failed to build transport")
}

/// Client pointing at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> Client {
    Client::from_config(config_for(server)).expect("Failed to build client")
}
