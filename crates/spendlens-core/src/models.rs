//! Domain models for Spendlens

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bank customer whose transactions are analyzed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub customer_id: i64,
    /// Signed amount, stored exactly
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
    /// Free-text spending category (e.g. "restaurants", "bill")
    pub category: String,
    /// Merchant or biller, compared verbatim
    pub vendor: String,
}

/// For inserting new transactions
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub vendor: String,
    /// Hash for deduplication
    pub import_hash: String,
}
