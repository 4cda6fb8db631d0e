//! Shared fixtures for integration tests.

use std::time::Duration;

use kinema_server::{ServerConfig, run_server};

/// An in-process server bound to a fixed test port.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Spawn the server and wait until it accepts connections.
    pub async fn start(port: u16) -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
        };
        tokio::spawn(async move {
            if let Err(e) = run_server(config).await {
                panic!("test server failed: {e}");
            }
        });

        for _ in 0..50 {
            if tokio::net::TcpStream::connect(("127.0.0.1", port))
                .await
                .is_ok()
            {
                return Self { port };
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("test server did not start on port {port}");
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}
