//! FlexiRate Server - Health insurance quoting API
//!
//! Serves premium quotes from a pre-trained claim cost model. The model is
//! loaded once at startup; if the artifact is missing or unreadable the
//! server still comes up and reports the failure through `/health`.
//!
//! # Usage
//! ```sh
//! FLEXIRATE_PORT=8000 cargo run
//! ```
//!
//! # Environment Variables
//! - `FLEXIRATE_HOST` - Bind address (default: 127.0.0.1)
//! - `FLEXIRATE_PORT` - Listen port (default: 8000)
//! - `FLEXIRATE_MODEL_PATH` - Model artifact path (default: models/flexirate_claim_model.json)

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use flexirate::application::quote_service::QuoteService;
use flexirate::config::Config;
use flexirate::interfaces::http;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Bind address, overrides FLEXIRATE_HOST
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides FLEXIRATE_PORT
    #[arg(long)]
    port: Option<u16>,

    /// Path to the model artifact, overrides FLEXIRATE_MODEL_PATH
    #[arg(long)]
    model_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("FlexiRate Server {} starting...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let mut config = Config::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(model_path) = args.model_path {
        config.model_path = model_path;
    }

    info!(
        "Configuration loaded: bind={}, model={:?}",
        config.bind_address(),
        config.model_path
    );

    let service = Arc::new(QuoteService::from_config(&config));
    if !service.model_loaded() {
        info!("Serving in degraded mode until a valid model artifact is provided.");
    }

    http::serve(&config.bind_address(), service).await
}
