//! Shared test harness.
//!
//! Starts the fixture server once per test binary on a random port (the
//! server fakes all writes, so parallel test threads can share it) and hands
//! out configured clients, schema paths, and fixture payloads.

#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::{Once, OnceLock};
use std::time::Duration;

use contract_core::{Config, HttpClient, RetryPolicy, SqlValue};
use serde_json::Value;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Base URL of the per-binary fixture server, spawning it on first use.
pub fn server_url() -> &'static str {
    static URL: OnceLock<String> = OnceLock::new();
    URL.get_or_init(|| {
        init_logging();
        let std_listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                fixture_server::run(listener).await
            })
            .unwrap();
        });
        format!("http://{addr}")
    })
}

/// Session config pointing at the spawned server.
pub fn config() -> Config {
    Config {
        base_url: server_url().to_string(),
        timeout_secs: 10,
    }
}

/// Client with a short retry delay so a transient fault cannot stall the run.
pub fn client() -> HttpClient {
    HttpClient::from_config(&config()).with_policy(RetryPolicy::new(3, Duration::from_millis(50)))
}

pub fn schema_path(name: &str) -> String {
    format!("{}/data/schemas/{name}", env!("CARGO_MANIFEST_DIR"))
}

pub fn load_testdata(name: &str) -> Value {
    let path = format!("{}/data/testdata/{name}", env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {path}: {e}"));
    serde_json::from_str(&raw).unwrap_or_else(|e| panic!("invalid JSON in {path}: {e}"))
}

pub fn sql_i64(value: &SqlValue) -> i64 {
    match value {
        SqlValue::Integer(i) => *i,
        other => panic!("expected an integer column, got {other:?}"),
    }
}

pub fn sql_str(value: &SqlValue) -> &str {
    match value {
        SqlValue::Text(s) => s.as_str(),
        other => panic!("expected a text column, got {other:?}"),
    }
}
