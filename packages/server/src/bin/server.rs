//! Kinema match engine server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin kinema-server -- --host 127.0.0.1 --port 8080
//! ```

use clap::Parser;

use kinema_server::ServerConfig;
use kinema_shared::logger::setup_logger;

#[derive(Debug, Parser)]
#[command(name = "kinema-server", about = "Room coordination server for Kinema")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let config = ServerConfig {
        host: args.host,
        port: args.port,
    };

    if let Err(e) = kinema_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
