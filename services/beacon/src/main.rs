//! Beacon CLI
//!
//! Terminal frontend for the Beacon demo backend.

use std::path::PathBuf;
use std::time::Duration;

use beacon::session::run_interactive;
use beacon::{load_config, BeaconBuilder, Config, EnvOverrides, ResolvedConfig};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[command(name = "beacon")]
#[command(about = "Terminal frontend for the Beacon demo backend")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides BEACON_BACKEND_URL and the config file)
    #[arg(short, long)]
    backend_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Render once and exit instead of reading commands from stdin
    #[arg(long)]
    once: bool,

    /// Start with the debug panel expanded
    #[arg(short, long)]
    debug: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, backend_url={:?}, once={}, debug={}",
        args.config,
        args.backend_url,
        args.once,
        args.debug
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(timeout) = args.timeout {
        config.request_timeout = Some(Duration::from_secs(timeout));
    }

    let resolved = ResolvedConfig::resolve_with_cli(
        &config,
        EnvOverrides::from_process_env(),
        args.backend_url.as_deref(),
    );

    tracing::info!("Backend URL: {}", resolved.base_url);

    let mut session = BeaconBuilder::new(resolved).build()?;
    if args.debug {
        session.open_debug_panel();
    }
    session.start().await;

    if args.once {
        print!("{}", session.render());
        if session.state().error().is_some() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_interactive(&mut session, stdin, &mut stdout).await?;

    Ok(())
}
