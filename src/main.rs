// src/main.rs
// Calculator App - single-page web calculator

use anyhow::Result;
use calculator_app::config::{DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, ServerConfig};
use calculator_app::server;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "calculator-app")]
#[command(about = "Single-page web calculator")]
#[command(version)]
struct Cli {
    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Max accepted request body size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
    max_body_bytes: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        ServerConfig {
            host: cli.host,
            port: cli.port,
            max_body_bytes: cli.max_body_bytes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Calculator App v{}", env!("CARGO_PKG_VERSION"));

    server::run(cli.into()).await
}
