//! Spendlens CLI - Customer spending insights
//!
//! Usage:
//!   spendlens init                                Initialize database
//!   spendlens customers add "Name"                Create a customer
//!   spendlens import --file CSV --customer 1      Import transactions
//!   spendlens insights --customer 1               Show insights
//!   spendlens serve --port 3000                   Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Customers { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_customers_list(&db),
                Some(CustomersAction::Add { name }) => {
                    commands::cmd_customers_add(&db, &name).map(|_| ())
                }
            }
        }
        Commands::Import { file, customer } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_import(&db, &file, customer)
        }
        Commands::Insights { customer, json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_insights(&db, customer, json)
        }
        Commands::Demo => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_demo(&db)
        }
        Commands::Serve { port, host } => commands::cmd_serve(&cli.db, &host, port).await,
    }
}
