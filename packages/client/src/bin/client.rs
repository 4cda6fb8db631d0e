//! CLI swipe client for Kinema.
//!
//! Create a room:
//! ```not_rust
//! cargo run --bin kinema-client -- create --sources Netflix,Hulu
//! ```
//!
//! Join a room:
//! ```not_rust
//! cargo run --bin kinema-client -- join MAKO42
//! ```

use std::sync::Arc;

use clap::{Parser, Subcommand};

use kinema_client::api::{ApiClient, JoinResponse};
use kinema_client::catalog::{CatalogSource, FallbackCatalog, SampleCatalog, TmdbCatalog};
use kinema_client::{SessionContext, run_session};
use kinema_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(version, about = "Two-person movie swipe client", long_about = None)]
struct Args {
    /// Base URL of the match engine
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new room and wait for a partner
    Create {
        /// Comma-separated streaming services to draw movies from (at least one)
        #[arg(long, value_delimiter = ',', required = true)]
        sources: Vec<String>,
    },
    /// Join an existing room by code
    Join {
        /// Six-character room code
        code: String,
    },
}

fn catalog_source() -> Arc<dyn CatalogSource> {
    match std::env::var("TMDB_API_KEY") {
        Ok(key) if !key.is_empty() => Arc::new(FallbackCatalog::new(TmdbCatalog::new(key))),
        _ => {
            tracing::warn!("TMDB_API_KEY not set, using the built-in sample catalog");
            Arc::new(SampleCatalog)
        }
    }
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "warn");

    let args = Args::parse();
    let api = ApiClient::new(&args.server);

    let context = match args.command {
        Command::Create { sources } => {
            let sources: Vec<String> = sources
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if sources.is_empty() {
                eprintln!("At least one streaming service is required, e.g. --sources Netflix,Hulu");
                std::process::exit(2);
            }
            match api.create_room(&sources).await {
                Ok(created) => {
                    println!("Created room {}. Share the code with your partner.", created.code);
                    SessionContext {
                        code: created.code,
                        participant_id: Some(created.participant_id),
                        allowed_sources: sources,
                        api,
                    }
                }
                Err(e) => {
                    eprintln!("Failed to create room: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Join { code } => match api.join_room(&code).await {
            Ok(JoinResponse::Joined { participant_id, room }) => SessionContext {
                code: room.code,
                participant_id: Some(participant_id),
                allowed_sources: room.allowed_sources,
                api,
            },
            Ok(JoinResponse::Spectator { room }) => SessionContext {
                code: room.code,
                participant_id: None,
                allowed_sources: room.allowed_sources,
                api,
            },
            Err(e) => {
                eprintln!("Failed to join room {code}: {e}");
                std::process::exit(1);
            }
        },
    };

    if let Err(e) = run_session(context, catalog_source()).await {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }
}
