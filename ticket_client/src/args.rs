//! Command-line arguments for the Ticket Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use ticket_common::TicketTypeRequest;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Account to reserve seats for and charge.
    /// Overrides the account id of a JSON request file.
    #[clap(long)]
    pub account_id: Option<u64>,

    /// Ticket request as TYPE=QTY, e.g. `adult=2`. May be repeated.
    #[clap(long = "ticket", value_name = "TYPE=QTY")]
    pub tickets: Vec<TicketTypeRequest>,

    /// Path to a request file: a JSON purchase request (`.json`), or one
    /// `TYPE QTY` entry per line otherwise.
    #[clap(long)]
    pub path: Option<String>,

    /// Validate and print the seats and price without reserving or paying.
    #[clap(long)]
    pub dry_run: bool,
}
