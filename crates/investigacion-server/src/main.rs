//! investigacion-server binary entry point
//!
//! # Usage
//!
//! ```bash
//! # Serve on the default address (127.0.0.1:8000), PDFs in the temp dir
//! investigacion-server
//!
//! # With a configuration file and debug logging
//! RUST_LOG=debug investigacion-server --config servidor.toml
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use investigacion_pdf::Renderer;
use investigacion_server::{router, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

/// Research-project PDF generation API
#[derive(Parser, Debug)]
#[command(name = "investigacion-server", version, about)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Bind address, overriding the configuration file
    #[arg(short, long)]
    bind: Option<String>,

    /// Output directory for generated PDFs, overriding the configuration file
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    info!("writing PDFs to {}", config.output_dir.display());

    let state = Arc::new(AppState::new(Renderer::new(&config.output_dir)));
    let app = router(state);

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutting down");
}
