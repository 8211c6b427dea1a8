//! Mock companion backend for local development and tests

use std::net::SocketAddr;

use beacon::mock_backend::{self, MockMode};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "beacon-mock-backend")]
#[command(about = "Serves /api/hello and /api/status for the Beacon frontend")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// Response behaviour
    #[arg(short, long, value_enum, default_value_t = MockMode::Ok)]
    mode: MockMode,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let (bound, server) = mock_backend::spawn(args.mode, addr).await?;
    println!("Bound mock backend bound_addr={}", bound);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
        result = server => {
            if let Err(e) = result {
                tracing::error!("Mock backend task failed: {}", e);
            }
        }
    }

    Ok(())
}
