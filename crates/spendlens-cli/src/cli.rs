//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Spendlens - Spending insights for bank customers
#[derive(Parser)]
#[command(name = "spendlens")]
#[command(about = "Customer spending insights from transaction history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "spendlens.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// List or manage customers
    Customers {
        #[command(subcommand)]
        action: Option<CustomersAction>,
    },

    /// Import transactions from CSV (date,description,amount,category,vendor)
    Import {
        /// CSV file to import
        #[arg(short, long)]
        file: PathBuf,

        /// Customer the transactions belong to
        #[arg(short, long)]
        customer: i64,
    },

    /// Show spending insights for a customer
    Insights {
        /// Customer ID
        #[arg(short, long)]
        customer: i64,

        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Seed two demo customers and print their insights
    Demo,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[derive(Subcommand)]
pub enum CustomersAction {
    /// Add a customer
    Add {
        /// Customer name
        name: String,
    },
}
