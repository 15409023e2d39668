//! Shared helpers for the integration tests

#![allow(dead_code)]

use networkapi_client::Vlan;
use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber; `RUST_LOG=networkapi_client=debug` shows request logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn vlan(environment: i64, number: i64, network: &str) -> Vlan {
    Vlan {
        environment,
        number,
        network: network.to_string(),
    }
}
