//! Bill tracking
//!
//! For every vendor, the most recent transaction is compared against a
//! baseline folded from the vendor's older transactions. The fold is a
//! recursive pairwise average, `ceil((acc + next) / 2)` from newest to
//! oldest, so older entries weigh less than recent ones. It is not an
//! arithmetic mean and the results depend on that order.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Transaction;

use super::types::{Insight, InsightKind, InsightRecord};

/// One insight per vendor whose latest amount differs from its baseline
///
/// Expects transactions already restricted to the twelve-month window.
/// Vendors are reported in order of first appearance once every
/// transaction is sorted newest first.
pub fn bill_tracking_insights<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<Insight> {
    let mut records: Vec<InsightRecord> = transactions
        .into_iter()
        .map(InsightRecord::from_transaction)
        .collect();
    // Stable: same-day records keep their input order
    records.sort_by(|a, b| b.date.cmp(&a.date));

    group_by_vendor(records)
        .into_iter()
        .filter_map(track_vendor)
        .flat_map(|record| record.insights())
        .collect()
}

/// Group records by exact vendor string, keeping first-appearance order
fn group_by_vendor(records: Vec<InsightRecord>) -> Vec<Vec<InsightRecord>> {
    let mut groups: Vec<Vec<InsightRecord>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.get(&record.vendor) {
            Some(&i) => groups[i].push(record),
            None => {
                index.insert(record.vendor.clone(), groups.len());
                groups.push(vec![record]);
            }
        }
    }

    groups
}

/// Compare a vendor's latest record with its baseline
///
/// `records` must be newest first. Returns `None` when there is no history
/// to compare against or the amounts are equal.
fn track_vendor(records: Vec<InsightRecord>) -> Option<InsightRecord> {
    let mut records = records.into_iter();
    let latest = records.next()?;
    let baseline = baseline_from(records)?;

    let compared = latest.compared_with(&baseline);
    (compared.kind != InsightKind::None).then_some(compared)
}

/// Fold older records (newest first) into one baseline record
///
/// The baseline keeps the date, category and vendor of the newest history
/// entry; only its amount is replaced. `None` for an empty history.
pub fn baseline_from(history: impl IntoIterator<Item = InsightRecord>) -> Option<InsightRecord> {
    history.into_iter().reduce(|acc, next| {
        let amount = ceiling_midpoint(acc.amount, next.amount);
        acc.with_amount(amount)
    })
}

/// `(a + b) / 2`, rounded toward positive infinity at the scale of `a + b`
pub fn ceiling_midpoint(a: Decimal, b: Decimal) -> Decimal {
    let sum = a + b;
    (sum / Decimal::TWO).round_dp_with_strategy(sum.scale(), RoundingStrategy::ToPositiveInfinity)
}
