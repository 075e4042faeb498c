//! Customer operations

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::Customer;

impl Database {
    /// Create a customer and return its ID
    pub fn create_customer(&self, name: &str) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute("INSERT INTO customers (name) VALUES (?)", params![name])?;
        Ok(conn.last_insert_rowid())
    }

    /// Create a customer with a fixed ID unless one already exists
    ///
    /// Returns true when a new row was written.
    pub fn ensure_customer(&self, id: i64, name: &str) -> Result<bool> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "INSERT OR IGNORE INTO customers (id, name) VALUES (?, ?)",
            params![id, name],
        )?;
        Ok(changed > 0)
    }

    /// Get a customer by ID
    pub fn get_customer(&self, id: i64) -> Result<Option<Customer>> {
        let conn = self.conn()?;
        let customer = conn
            .query_row(
                "SELECT id, name, created_at FROM customers WHERE id = ?",
                params![id],
                |row| {
                    let created_at_str: String = row.get(2)?;
                    Ok(Customer {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        created_at: parse_datetime(&created_at_str),
                    })
                },
            )
            .optional()?;

        Ok(customer)
    }

    /// List all customers
    pub fn list_customers(&self) -> Result<Vec<Customer>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, name, created_at FROM customers ORDER BY id")?;

        let customers = stmt
            .query_map([], |row| {
                let created_at_str: String = row.get(2)?;
                Ok(Customer {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: parse_datetime(&created_at_str),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(customers)
    }
}
