//! Vertex Chat API server binary.
//!
//! Serves the chat endpoints the Vertex chat bubble calls: `POST /chat` for
//! canned replies and `POST /chat/actions` for link activations.

use std::time::Duration;

use clap::Parser;
use tracing::info;
use vertex_chat_api::config::ApiConfig;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "vertex_chat_server", about = "Vertex Chat API server")]
struct Args {
    /// Port to listen on (0 = ephemeral). Replaces the port of `BIND_ADDR`, keeping its host.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// Simulated latency applied to every chat reply, in milliseconds.
    /// Overrides `VERTEX_CHAT_LATENCY_MS`.
    #[arg(long)]
    latency_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "info,vertex_chat_api=debug,vertex_chat_core=debug,vertex_chat=info",
                )
            }),
        )
        .init();

    let args = Args::parse();

    let mut config = ApiConfig::from_env()?;
    if let Some(port) = args.port {
        config.set_port(port);
    }
    if let Some(ms) = args.latency_ms {
        config.chat.latency = Duration::from_millis(ms);
    }

    info!(
        bind_addr = %config.bind_addr,
        latency_ms = config.chat.latency.as_millis() as u64,
        "starting vertex_chat_server"
    );

    let app = vertex_chat_api::router(vertex_chat_api::AppState::new(config.clone()));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
