//! site-builder CLI tool

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use site_builder_cli::{CategoriesCommand, SelectCommand, ServeCommand, TemplatesCommand};

#[derive(Parser)]
#[command(name = "site-builder")]
#[command(version)]
#[command(about = "Inspect the section catalog and serve the Add Section dialog")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sidebar categories
    Categories(CategoriesCommand),
    /// List the template grid
    Templates(TemplatesCommand),
    /// Print the payload a template click produces
    Select(SelectCommand),
    /// Serve the Add Section dialog over HTTP
    Serve(ServeCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Categories(cmd) => cmd.execute()?,
        Commands::Templates(cmd) => cmd.execute()?,
        Commands::Select(cmd) => cmd.execute()?,
        Commands::Serve(cmd) => cmd.execute().await?,
    }

    Ok(())
}
