//! Desk Control - CLI client for the desk daemon.
//!
//! Provides a terminal interface to the ticket triage API.

mod cli;
mod client;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use client::DeskClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = DeskClient::new(cli.url)?;

    match cli.command {
        Commands::Health => commands::health(&client).await,
        Commands::Order { order_id } => commands::order(&client, &order_id).await,
        Commands::Analyze {
            text,
            order_id,
            json,
        } => commands::analyze(&client, order_id, &text, json).await,
    }
}
