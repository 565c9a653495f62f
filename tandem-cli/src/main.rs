use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::net::{IpAddr, SocketAddr};
use tandem::server::{DEFAULT_PORT, ServerConfig, serve};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Pairs anonymous clients 1:1 and relays their signaling and chat.
#[derive(Parser, Debug)]
#[command(name = "tandem")]
#[command(version)]
struct Args {
    /// Address to bind to
    #[arg(long, env = "TANDEM_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Path that accepts WebSocket upgrades
    #[arg(long, env = "TANDEM_WS_PATH", default_value = "/")]
    ws_path: String,

    /// Extra chat term to mask, on top of the built-in list (repeatable)
    #[arg(long = "block", value_name = "TERM")]
    blocked: Vec<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if !args.ws_path.starts_with('/') {
        anyhow::bail!("--ws-path must start with '/', got {:?}", args.ws_path);
    }

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        ws_path: args.ws_path,
        ..ServerConfig::default()
    }
    .with_extra_terms(args.blocked);

    println!("{}", "🚀 Starting Tandem matchmaking server...".green().bold());
    println!("   🔌 Listening: {}", config.bind_addr.to_string().cyan());
    println!("   🛡  Masked terms: {}", config.blocked_terms.len());

    serve(config, shutdown_signal())
        .await
        .context("Matchmaking server failed")?;

    println!("{}", "✨ Server stopped cleanly".green().bold());
    Ok(())
}
