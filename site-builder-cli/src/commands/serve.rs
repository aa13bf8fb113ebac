//! Serve the Add Section dialog over HTTP

use anyhow::{Context, Result};
use clap::Args;
use console::{style, Emoji};
use site_builder::config::SiteBuilderConfig;
use site_builder::handlers;
use site_builder::observability::{self, ObservabilityConfig};
use site_builder::state::AppState;
use std::path::PathBuf;

static ROCKET: Emoji = Emoji("🚀", ">");

/// Run the HTMX section service
#[derive(Debug, Clone, Args)]
pub struct ServeCommand {
    /// Configuration file (defaults to the layered service config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Service name used to locate configuration
    #[arg(long, default_value = "site-builder")]
    pub service: String,

    /// Override the configured port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeCommand {
    /// Load the configuration this command would serve with
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<SiteBuilderConfig> {
        let mut config = match &self.config {
            Some(path) => SiteBuilderConfig::load_from(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => SiteBuilderConfig::load_for_service(&self.service)
                .context("Failed to load configuration")?,
        };
        if let Some(port) = self.port {
            config.server.port = port;
        }
        Ok(config)
    }

    /// Execute the command
    ///
    /// Serves until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, logging setup, binding or
    /// serving fails.
    pub async fn execute(&self) -> Result<()> {
        let observability = ObservabilityConfig::new(&self.service);
        observability::init_with(&observability)?;

        let config = self.load_config()?;
        let addr = config.server.socket_addr()?;
        let state = AppState::with_config(config).with_observability(observability);
        let app = handlers::app(state);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        println!(
            "{} {} http://{addr}/sections",
            ROCKET,
            style("Serving Add Section dialog on").green().bold()
        );
        tracing::info!(%addr, "Starting server");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
    }
}
