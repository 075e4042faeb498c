//! Core types for the insight engine
//!
//! `InsightRecord` is the working value both engines pass through their
//! pipelines. Every transform consumes a record and returns a new one, so a
//! record placed in one vendor or category group can never be changed
//! through another.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Transaction;

/// Category reported by bill tracking instead of spend-by-category
pub const BILL_CATEGORY: &str = "bill";

const POUND_SIGN: &str = "£";

/// What kind of observation a record has produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Total spend in a category this month
    SpendByCategory,
    /// Latest bill vs previous bills from the same vendor
    BillTracking,
    /// Latest non-bill spend vs previous spend at the same vendor
    Outgoings,
    /// Nothing to report
    None,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::SpendByCategory => "spend_by_category",
            InsightKind::BillTracking => "bill_tracking",
            InsightKind::Outgoings => "outgoings",
            InsightKind::None => "none",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Direction of a bill-tracking comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Higher,
    Lower,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Higher => "more",
            Trend::Lower => "less",
        }
    }
}

/// A single rendered insight message
///
/// Two insights with the same text are the same insight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insight {
    insight: String,
}

impl Insight {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            insight: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.insight
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.insight)
    }
}

impl From<String> for Insight {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Round to a whole currency unit, ties away from zero
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount as whole pounds, sign dropped: `£40`
pub fn format_pounds(amount: Decimal) -> String {
    format!("{}{}", POUND_SIGN, round_half_up(amount.abs()))
}

/// Working record built from a transaction or an aggregate of transactions
#[derive(Debug, Clone, PartialEq)]
pub struct InsightRecord {
    pub amount: Decimal,
    pub date: NaiveDate,
    /// Always lower case
    pub category: String,
    pub vendor: String,
    /// Messages rendered so far, oldest first
    pub messages: Vec<String>,
    pub kind: InsightKind,
}

impl InsightRecord {
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            amount: tx.amount,
            date: tx.date,
            category: tx.category.to_lowercase(),
            vendor: tx.vendor.clone(),
            messages: Vec::new(),
            kind: InsightKind::None,
        }
    }

    pub fn is_bill(&self) -> bool {
        self.category == BILL_CATEGORY
    }

    /// Same record carrying a replacement amount
    pub fn with_amount(self, amount: Decimal) -> Self {
        Self { amount, ..self }
    }

    /// Record the category total and render the spend-by-category message
    pub fn with_spend_by_category(self, total: Decimal) -> Self {
        let text = format!(
            "You've spent {} in {} this month",
            format_pounds(total),
            self.category
        );
        self.with_amount(total)
            .with_message(InsightKind::SpendByCategory, text)
    }

    /// Compare this (latest) record against a baseline
    ///
    /// Equal amounts leave the record untouched with no message.
    pub fn compared_with(self, baseline: &InsightRecord) -> Self {
        if self.amount > baseline.amount {
            let delta = self.amount - baseline.amount;
            self.with_tracking(Trend::Higher, delta)
        } else if self.amount < baseline.amount {
            let delta = baseline.amount - self.amount;
            self.with_tracking(Trend::Lower, delta)
        } else {
            self
        }
    }

    fn with_tracking(self, trend: Trend, delta: Decimal) -> Self {
        if self.is_bill() {
            let text = format!(
                "Your latest {} {} is {} {} than previous months",
                self.vendor,
                self.category,
                format_pounds(delta),
                trend.as_str()
            );
            self.with_message(InsightKind::BillTracking, text)
        } else {
            let text = format!(
                "Your latest {} spend in {} is {} {} than previous months",
                self.category,
                self.vendor,
                format_pounds(delta),
                trend.as_str()
            );
            self.with_message(InsightKind::Outgoings, text)
        }
    }

    fn with_message(mut self, kind: InsightKind, text: String) -> Self {
        self.messages.push(text);
        self.kind = kind;
        self
    }

    /// Insights produced by this record (none while its kind is `None`)
    pub fn insights(&self) -> Vec<Insight> {
        if self.kind == InsightKind::None {
            return Vec::new();
        }
        self.messages.iter().cloned().map(Insight::new).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(amount: Decimal, category: &str, vendor: &str) -> InsightRecord {
        InsightRecord::from_transaction(&Transaction {
            id: 1,
            customer_id: 1,
            amount,
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            description: String::new(),
            category: category.to_string(),
            vendor: vendor.to_string(),
        })
    }

    #[test]
    fn test_round_half_up_ties_away_from_zero() {
        assert_eq!(round_half_up(Decimal::new(4050, 2)), Decimal::new(41, 0));
        assert_eq!(round_half_up(Decimal::new(4049, 2)), Decimal::new(40, 0));
        assert_eq!(round_half_up(Decimal::new(-4050, 2)), Decimal::new(-41, 0));
    }

    #[test]
    fn test_format_pounds() {
        assert_eq!(format_pounds(Decimal::new(400000, 2)), "£4000");
        assert_eq!(format_pounds(Decimal::new(-35000, 2)), "£350");
        assert_eq!(format_pounds(Decimal::new(250, 2)), "£3");
        assert_eq!(format_pounds(Decimal::new(1234567, 0)), "£1234567");
    }

    #[test]
    fn test_category_is_lower_cased_vendor_is_not() {
        let r = record(Decimal::ONE, "Restaurants", "Nandos'");
        assert_eq!(r.category, "restaurants");
        assert_eq!(r.vendor, "Nandos'");
        assert_eq!(r.kind, InsightKind::None);
        assert!(r.insights().is_empty());
    }

    #[test]
    fn test_spend_by_category_message() {
        let r = record(Decimal::new(15000, 2), "restaurants", "Bob's Burgers")
            .with_spend_by_category(Decimal::new(35000, 2));

        assert_eq!(r.kind, InsightKind::SpendByCategory);
        assert_eq!(r.amount, Decimal::new(35000, 2));
        assert_eq!(
            r.insights(),
            vec![Insight::new("You've spent £350 in restaurants this month")]
        );
    }

    #[test]
    fn test_bill_comparison_messages() {
        let baseline = record(Decimal::new(10000, 2), "bill", "Vodafone");

        let lower = record(Decimal::new(6000, 2), "BILL", "Vodafone").compared_with(&baseline);
        assert_eq!(lower.kind, InsightKind::BillTracking);
        assert_eq!(
            lower.messages,
            vec!["Your latest Vodafone bill is £40 less than previous months"]
        );

        let higher = record(Decimal::new(14000, 2), "bill", "Vodafone").compared_with(&baseline);
        assert_eq!(
            higher.messages,
            vec!["Your latest Vodafone bill is £40 more than previous months"]
        );
    }

    #[test]
    fn test_non_bill_comparison_is_outgoings() {
        let baseline = record(Decimal::new(10000, 2), "restaurants", "Nandos'");
        let latest = record(Decimal::new(6000, 2), "Restaurants", "Nandos'").compared_with(&baseline);

        assert_eq!(latest.kind, InsightKind::Outgoings);
        assert_eq!(
            latest.insights(),
            vec![Insight::new(
                "Your latest restaurants spend in Nandos' is £40 less than previous months"
            )]
        );
    }

    #[test]
    fn test_equal_amounts_produce_nothing() {
        // 200 and 200.00 compare equal
        let baseline = record(Decimal::new(200, 0), "bill", "Vodafone");
        let latest = record(Decimal::new(20000, 2), "bill", "Vodafone").compared_with(&baseline);

        assert_eq!(latest.kind, InsightKind::None);
        assert!(latest.insights().is_empty());
    }

    #[test]
    fn test_insight_equality_is_by_text() {
        let a = Insight::new("You've spent £2 in restaurants this month");
        let b = Insight::from("You've spent £2 in restaurants this month".to_string());
        assert_eq!(a, b);
        assert_eq!(a.to_string(), a.text());
    }

    #[test]
    fn test_insight_serializes_as_object() {
        let json = serde_json::to_value(Insight::new("hello")).unwrap();
        assert_eq!(json, serde_json::json!({ "insight": "hello" }));
    }
}
