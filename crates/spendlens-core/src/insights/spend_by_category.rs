//! Spend by category
//!
//! Totals this month's spend per category and reports each category once.
//! Bills are left to bill tracking.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::Transaction;

use super::types::{Insight, InsightRecord, BILL_CATEGORY};

/// One insight per non-bill category, in order of first appearance
///
/// Expects transactions already restricted to the current-month window.
pub fn spend_by_category_insights<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<Insight> {
    group_by_category(transactions)
        .into_iter()
        .filter(|(category, _)| category != BILL_CATEGORY)
        .flat_map(|(_, group)| category_record(&group).insights())
        .collect()
}

/// Group by lower-cased category, keeping first-appearance order
fn group_by_category<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Vec<(String, Vec<&'a Transaction>)> {
    let mut groups: Vec<(String, Vec<&Transaction>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for tx in transactions {
        let category = tx.category.to_lowercase();
        match index.get(&category) {
            Some(&i) => groups[i].1.push(tx),
            None => {
                index.insert(category.clone(), groups.len());
                groups.push((category, vec![tx]));
            }
        }
    }

    groups
}

/// Record carrying the exact category total
fn category_record(group: &[&Transaction]) -> InsightRecord {
    let total: Decimal = group.iter().map(|tx| tx.amount).sum();
    // Groups are never empty, and every member renders the same text
    InsightRecord::from_transaction(group[0]).with_spend_by_category(total)
}
