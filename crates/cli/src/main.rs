//! Festiva CLI - Store bootstrap and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Create the store (schema + seed), with the recovery policy applied
//! festiva-cli db init
//!
//! # Insert the seed data into an empty, ready store
//! festiva-cli db seed
//!
//! # Report schema status and row counts
//! festiva-cli db status
//! ```
//!
//! The store location comes from `FESTIVA_DATABASE_URL` (or `DATABASE_URL`),
//! defaulting to the embedded `sqlite://festiva.db` file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "festiva-cli")]
#[command(version, about = "Festiva CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the catalog store
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Bootstrap the store: create the schema if needed and seed it
    Init,
    /// Seed an empty, ready store
    Seed,
    /// Show schema status and row counts
    Status,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Db { action } => match action {
            DbAction::Init => commands::db::init().await?,
            DbAction::Seed => commands::db::seed().await?,
            DbAction::Status => commands::db::status().await?,
        },
    }
    Ok(())
}
