//! Tertulia server binary
//!
//! Wires configuration, logging, the template provider and the seed loader
//! around the chat server, then serves until the process is killed or the
//! accept loop hits a fatal fault.

use clap::Parser;
use std::path::PathBuf;
use tertulia_core::{
    load_config_from_toml_path, load_template, utils, MessageStore, ServerConfig, DEFAULT_TEMPLATE,
};
use tertulia_server::seed::load_seed_messages;
use tertulia_server::ChatServer;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "tertulia")]
#[command(about = "A minimal in-memory chat service over HTTP")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host to bind (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the HTML template shell (overrides the config file)
    #[arg(long, value_name = "FILE")]
    template: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> tertulia_core::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config_from_toml_path(path)?,
        None => ServerConfig::default(),
    };
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(template) = cli.template {
        config.template_path = Some(template);
    }
    config.validate()?;

    utils::init_tracing(&config.log_level)?;
    info!("Starting Tertulia chat server");

    let template = match &config.template_path {
        Some(path) => load_template(path)?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let store = MessageStore::new();
    load_seed_messages(&store).await?;
    info!("Store seeded with {} messages", store.len().await);

    let server = ChatServer::bind(&config, store, template).await?;
    if let Err(e) = server.serve().await {
        error!("Server terminated ({}): {}", e.code(), e);
        return Err(e);
    }

    Ok(())
}
