//! CLI module for the Expense Ledger API
//!
//! Provides subcommands for running the ledger:
//! - `serve`: run the API server

pub mod serve;

use clap::{Parser, Subcommand};

/// Expense Ledger API - volatile record store with a caching client layer
#[derive(Parser)]
#[command(name = "expense-ledger-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
