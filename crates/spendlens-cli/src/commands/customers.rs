//! Customer command implementations

use anyhow::{bail, Result};
use spendlens_core::db::Database;

pub fn cmd_customers_list(db: &Database) -> Result<()> {
    let customers = db.list_customers()?;

    if customers.is_empty() {
        println!("No customers found. Add one with:");
        println!("  spendlens customers add \"Jane Doe\"");
        return Ok(());
    }

    println!();
    println!("👤 Customers");
    println!("   ─────────────────────────────");

    for customer in customers {
        let count = db.count_transactions(Some(customer.id))?;
        println!(
            "   {:>4}  {} ({} transactions)",
            customer.id, customer.name, count
        );
    }

    Ok(())
}

/// Create a customer and return its ID
pub fn cmd_customers_add(db: &Database, name: &str) -> Result<i64> {
    let name = name.trim();
    if name.is_empty() {
        bail!("Customer name cannot be empty");
    }

    let id = db.create_customer(name)?;
    println!("✅ Added customer {} (id {})", name, id);
    Ok(id)
}
