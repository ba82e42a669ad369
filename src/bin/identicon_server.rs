//! Identicon Server - serves `GET /avatar/{name}`

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use identicon_core::{http, AvatarPipeline, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "identicon-server")]
#[command(about = "Identicon Server - deterministic gradient avatars over HTTP")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides `listen` from the config
    #[arg(short, long)]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("identicon_core=info,identicon_server=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let config = ServerConfig::resolve(args.config.as_deref(), args.listen)?;

    let app = http::router(AvatarPipeline::new(), &config);
    let listener = TcpListener::bind(config.listen).await?;
    info!(
        listen = %config.listen,
        route = %config.avatar_route(),
        max_name_bytes = ?config.max_name_bytes,
        "serving avatars"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
