//! Tryline - content core for a rugby news site.

mod cli;
mod commands;
mod config;
mod data;
mod directory;
mod listing;
mod logger;
mod record;
mod store;
mod toc;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::List {
            filter,
            limit,
            json,
        } => commands::list(&config, filter, *limit, *json),
        Commands::Show { slug, json } => commands::show(&config, slug, *json),
        Commands::Toc { slug, .. } => commands::toc(&config, slug),
        Commands::Top { json, .. } => commands::top(&config, *json),
        Commands::Teams => commands::teams(&config),
        Commands::Writers => commands::writers(&config),
        Commands::Writer { slug } => commands::writer(&config, slug),
        Commands::Categories => commands::categories(&config),
        Commands::Category { slug } => commands::category(&config, slug),
        Commands::Export { .. } => commands::export(&config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));

    let mut config = SiteConfig::load(root, &cli.config)
        .with_context(|| format!("Failed to load config from {}", root.display()))?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
