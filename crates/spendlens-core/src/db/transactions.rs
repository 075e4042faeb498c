//! Transaction operations

use chrono::NaiveDate;
use rusqlite::{params, types::Type, OptionalExtension};
use rust_decimal::Decimal;

use super::Database;
use crate::error::{Error, Result};
use crate::insights::TransactionStore;
use crate::models::{NewTransaction, Transaction};

const TRANSACTION_COLUMNS: &str = "id, customer_id, date, description, amount, category, vendor";

impl Database {
    /// Insert a transaction for a customer (skips duplicates based on import_hash)
    ///
    /// Duplicates are per customer: the same statement imported for two
    /// customers lands in both histories. Returns the new row ID, or `None`
    /// if the customer already has the transaction.
    pub fn insert_transaction(&self, customer_id: i64, tx: &NewTransaction) -> Result<Option<i64>> {
        let conn = self.conn()?;

        let customer_exists: Option<i64> = conn
            .query_row(
                "SELECT id FROM customers WHERE id = ?",
                params![customer_id],
                |row| row.get(0),
            )
            .optional()?;
        if customer_exists.is_none() {
            return Err(Error::NotFound(format!("customer {}", customer_id)));
        }

        // Check for duplicate
        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM transactions WHERE customer_id = ? AND import_hash = ?",
                params![customer_id, tx.import_hash],
                |row| row.get(0),
            )
            .optional()?;

        if existing.is_some() {
            return Ok(None); // Duplicate, skip
        }

        conn.execute(
            r#"
            INSERT INTO transactions (customer_id, date, description, amount, category, vendor, import_hash)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                customer_id,
                tx.date.to_string(),
                tx.description,
                tx.amount.to_string(),
                tx.category,
                tx.vendor,
                tx.import_hash,
            ],
        )?;

        Ok(Some(conn.last_insert_rowid()))
    }

    /// All transactions for a customer, in insertion order
    pub fn list_transactions_for_customer(&self, customer_id: i64) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM transactions WHERE customer_id = ? ORDER BY id",
            TRANSACTION_COLUMNS
        ))?;

        let transactions = stmt
            .query_map(params![customer_id], Self::row_to_transaction)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Count transactions, optionally for a single customer
    pub fn count_transactions(&self, customer_id: Option<i64>) -> Result<i64> {
        let conn = self.conn()?;
        let count = match customer_id {
            Some(id) => conn.query_row(
                "SELECT COUNT(*) FROM transactions WHERE customer_id = ?",
                params![id],
                |row| row.get(0),
            )?,
            None => conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?,
        };
        Ok(count)
    }

    pub(crate) fn row_to_transaction(row: &rusqlite::Row) -> rusqlite::Result<Transaction> {
        let date_str: String = row.get(2)?;
        let amount_str: String = row.get(4)?;

        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
        let amount = amount_str
            .parse::<Decimal>()
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))?;

        Ok(Transaction {
            id: row.get(0)?,
            customer_id: row.get(1)?,
            date,
            description: row.get(3)?,
            amount,
            category: row.get(5)?,
            vendor: row.get(6)?,
        })
    }
}

impl TransactionStore for Database {
    fn transactions_for_customer(&self, customer_id: i64) -> Result<Vec<Transaction>> {
        self.list_transactions_for_customer(customer_id)
    }
}
