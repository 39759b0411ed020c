//! Shared test utilities for examprep-server integration tests

use std::net::SocketAddr;
use std::sync::Arc;

use examprep_core::QuestionBank;
use examprep_server::{AppState, ExamprepServer, ServerConfig};
use tokio::net::TcpListener;

/// Starts a server over `bank` with default config, returns state and address
#[allow(dead_code)]
pub async fn create_test_server(bank: QuestionBank) -> (Arc<AppState>, SocketAddr) {
    create_test_server_with_config(bank, ServerConfig::default()).await
}

/// Starts a server over `bank` with custom config
#[allow(dead_code)]
pub async fn create_test_server_with_config(
    bank: QuestionBank,
    config: ServerConfig,
) -> (Arc<AppState>, SocketAddr) {
    let state = Arc::new(AppState::new(bank));
    let server = ExamprepServer::new(config, Arc::clone(&state));
    let addr = spawn_server(server).await;

    (state, addr)
}

/// Spawns server in background task, returns bound address
async fn spawn_server(server: ExamprepServer) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run_with_listener(listener).await;
    });

    // Brief delay to ensure server is accepting connections
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    addr
}
