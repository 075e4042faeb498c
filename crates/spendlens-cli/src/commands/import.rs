//! Import command implementation

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use spendlens_core::{db::Database, import::parse_csv};
use tracing::info;

pub fn cmd_import(db: &Database, file: &Path, customer_id: i64) -> Result<()> {
    let customer = db
        .get_customer(customer_id)?
        .with_context(|| format!("Customer {} does not exist", customer_id))?;

    println!(
        "📥 Importing {} for {}...",
        file.display(),
        customer.name
    );

    let csv_file =
        File::open(file).with_context(|| format!("Failed to open file: {}", file.display()))?;
    let transactions = parse_csv(csv_file)
        .with_context(|| format!("Failed to parse CSV: {}", file.display()))?;

    println!("   Found {} transactions", transactions.len());

    let mut imported = 0;
    let mut skipped = 0;

    for tx in &transactions {
        match db.insert_transaction(customer_id, tx)? {
            Some(_) => imported += 1,
            None => skipped += 1,
        }
    }

    info!(customer_id, imported, skipped, "Import complete");

    println!("   Imported: {}", imported);
    if skipped > 0 {
        println!("   Skipped (duplicates): {}", skipped);
    }
    println!("✅ Import complete!");

    Ok(())
}
