use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use mangrovechat::{Cli, ClientConfig, WebServer, WebServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client_config = ClientConfig::from_cli(&cli)?;

    println!(
        "{} {} (model: {}, history: {})",
        "🌿".green(),
        "Mangrove Chat".bright_green(),
        client_config.model,
        client_config.data_dir.display()
    );

    let server = WebServer::new(WebServerConfig {
        bind_addr: cli.bind,
        client_config,
    })?;

    server.start().await
}
