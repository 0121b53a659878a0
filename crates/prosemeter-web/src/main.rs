//! Prosemeter service entry point.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use prosemeter_client::{AdviceClient, DictionaryClient};
use prosemeter_web::{router, AppConfig, AppState};

/// Prosemeter — readability statistics web service
#[derive(Parser, Debug)]
#[command(name = "prosemeter")]
#[command(about = "Readability statistics with dictionary and advice lookups", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides the config file)
    #[arg(short, long)]
    bind: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind = bind;
    }

    let http = config.http.build_client()?;
    let state = Arc::new(AppState::new(
        DictionaryClient::new(http.clone(), &config.http),
        AdviceClient::new(http, &config.http),
    ));

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(addr = %config.bind, "prosemeter listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
