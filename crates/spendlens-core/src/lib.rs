//! Spendlens Core Library
//!
//! Shared functionality for the Spendlens insights service:
//! - Database access and migrations
//! - CSV import of customer transactions
//! - Insight engine (bill tracking and spend by category)

pub mod db;
pub mod error;
pub mod import;
pub mod insights;
pub mod models;

pub use db::Database;
pub use error::{Error, Result};
pub use insights::{generate_insights, Insight, InsightEngine, TransactionStore};
pub use models::{Customer, NewTransaction, Transaction};
