//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};

/// Helpdesk agent CLI
#[derive(Parser)]
#[command(name = "deskctl")]
#[command(about = "Helpdesk agent - ticket triage client", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Daemon base URL (overrides $DESKD_URL and the default)
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check daemon health
    Health,

    /// Look up an order by id (used verbatim, e.g. ORD-1001)
    Order {
        /// Order id
        order_id: String,
    },

    /// Analyze a ticket and print the drafted reply
    Analyze {
        /// Raw ticket text
        text: String,

        /// Optional order id, e.g. ORD-1001
        #[arg(long)]
        order_id: Option<String>,

        /// Print the raw JSON response instead of formatted output
        #[arg(long)]
        json: bool,
    },
}
