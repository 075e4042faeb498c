//! Insight Engine - Customer Spending Insights
//!
//! Turns a customer's transaction history into short, human-readable
//! observations about their spending.
//!
//! ## Insight Types
//!
//! - **Bill Tracking** - Latest transaction per vendor vs the vendor's history
//!   over the last twelve months
//! - **Spend by Category** - Total spend per category in the current month
//!
//! ## Usage
//!
//! ```rust,ignore
//! use spendlens_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new(&db);
//! for insight in engine.insights_for_customer(1)? {
//!     println!("{}", insight);
//! }
//! ```

pub mod bill_tracking;
pub mod engine;
pub mod spend_by_category;
pub mod types;
pub mod window;

pub use bill_tracking::bill_tracking_insights;
pub use engine::{generate_insights, InsightEngine, TransactionStore};
pub use spend_by_category::spend_by_category_insights;
pub use types::{Insight, InsightKind, InsightRecord, Trend, BILL_CATEGORY};
pub use window::{CURRENT_MONTH, LAST_12_MONTHS};
