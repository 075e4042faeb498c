//! Server command implementation

use std::path::Path;

use anyhow::{Context, Result};
use spendlens_server::{ServerConfig, ALLOWED_ORIGINS_ENV};

use super::open_db;

pub async fn cmd_serve(db_path: &Path, host: &str, port: u16) -> Result<()> {
    println!("🚀 Starting Spendlens web server...");
    println!("   Database: {}", db_path.display());
    println!("   Listening: http://{}:{}", host, port);
    println!(
        "   Insights: http://{}:{}/api/v1/customer/insights/{{id}}",
        host, port
    );

    let config = ServerConfig::from_env();
    if config.allowed_origins.is_empty() {
        println!("   🔒 CORS: same-origin only (set {} to allow others)", ALLOWED_ORIGINS_ENV);
    } else {
        println!("   🌐 CORS origins: {}", config.allowed_origins.join(", "));
    }

    let db = open_db(db_path)?;

    spendlens_server::serve_with_config(db, host, port, config)
        .await
        .context("Server error")
}
