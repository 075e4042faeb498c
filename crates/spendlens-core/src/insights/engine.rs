//! Insight Engine - fetches a customer's history and runs both insight types

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::Transaction;

use super::bill_tracking::bill_tracking_insights;
use super::spend_by_category::spend_by_category_insights;
use super::types::Insight;
use super::window::{select_within_window, CURRENT_MONTH, LAST_12_MONTHS};

/// Source of a customer's transaction history
pub trait TransactionStore {
    /// Every transaction for the customer, in any order
    fn transactions_for_customer(&self, customer_id: i64) -> Result<Vec<Transaction>>;
}

impl<S: TransactionStore + ?Sized> TransactionStore for &S {
    fn transactions_for_customer(&self, customer_id: i64) -> Result<Vec<Transaction>> {
        (**self).transactions_for_customer(customer_id)
    }
}

/// Insights for an already-fetched history
///
/// Bill tracking (twelve-month window) comes first, then spend by category
/// (current-month window). Both windows are cut from the same `transactions`.
pub fn generate_insights(transactions: &[Transaction], today: NaiveDate) -> Vec<Insight> {
    let bill_tracking =
        bill_tracking_insights(select_within_window(transactions, LAST_12_MONTHS, today));
    let spend_by_category =
        spend_by_category_insights(select_within_window(transactions, CURRENT_MONTH, today));

    debug!(
        transactions = transactions.len(),
        bill_tracking = bill_tracking.len(),
        spend_by_category = spend_by_category.len(),
        %today,
        "Insight generation complete"
    );

    bill_tracking.into_iter().chain(spend_by_category).collect()
}

/// The insight engine, reading histories from a `TransactionStore`
pub struct InsightEngine<S> {
    store: S,
}

impl<S: TransactionStore> InsightEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Insights for a customer as of today's local date
    pub fn insights_for_customer(&self, customer_id: i64) -> Result<Vec<Insight>> {
        let today = chrono::Local::now().date_naive();
        self.insights_for_customer_on(customer_id, today)
    }

    /// Insights for a customer as of `today`
    ///
    /// Fails with `CustomerNotFound` when the customer has no transactions at
    /// all. A customer whose transactions trigger nothing gets an empty list.
    pub fn insights_for_customer_on(
        &self,
        customer_id: i64,
        today: NaiveDate,
    ) -> Result<Vec<Insight>> {
        let transactions = self.store.transactions_for_customer(customer_id)?;
        if transactions.is_empty() {
            return Err(Error::CustomerNotFound(customer_id));
        }

        debug!(
            customer_id,
            transactions = transactions.len(),
            "Loaded transaction history"
        );

        Ok(generate_insights(&transactions, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::NewTransaction;
    use chrono::Months;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    /// Store backed by a map, standing in for the database
    struct MemoryStore(HashMap<i64, Vec<Transaction>>);

    impl TransactionStore for MemoryStore {
        fn transactions_for_customer(&self, customer_id: i64) -> Result<Vec<Transaction>> {
            Ok(self.0.get(&customer_id).cloned().unwrap_or_default())
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn months_ago(n: u32) -> NaiveDate {
        today().checked_sub_months(Months::new(n)).unwrap()
    }

    fn tx(id: i64, amount: Decimal, date: NaiveDate, category: &str, vendor: &str) -> Transaction {
        Transaction {
            id,
            customer_id: 1,
            amount,
            date,
            description: "blah".to_string(),
            category: category.to_string(),
            vendor: vendor.to_string(),
        }
    }

    fn engine_with(transactions: Vec<Transaction>) -> InsightEngine<MemoryStore> {
        InsightEngine::new(MemoryStore(HashMap::from([(1, transactions)])))
    }

    #[test]
    fn test_customer_without_transactions_is_not_found() {
        let engine = engine_with(vec![]);

        let err = engine.insights_for_customer_on(99, today()).unwrap_err();
        assert!(matches!(err, Error::CustomerNotFound(99)));
        assert_eq!(err.to_string(), "Customer with id 99 not found");

        let err = engine.insights_for_customer_on(1, today()).unwrap_err();
        assert!(matches!(err, Error::CustomerNotFound(1)));
    }

    #[test]
    fn test_nothing_this_month_is_empty_not_an_error() {
        let engine = engine_with(vec![tx(1, Decimal::new(15000, 2), months_ago(1), "blah", "blah")]);

        let insights = engine.insights_for_customer_on(1, today()).unwrap();
        assert!(insights.is_empty());
    }

    #[test]
    fn test_bills_higher_food_lower_and_spend_by_category() {
        let higher = Decimal::new(10000, 2);
        let lower = Decimal::new(6000, 2);
        let engine = engine_with(vec![
            tx(1, lower, months_ago(1), "bill", "Vodafone"),
            tx(2, higher, months_ago(1), "restaurants", "Nandos'"),
            tx(3, higher, today(), "bill", "Vodafone"),
            tx(4, lower, today(), "restaurants", "Nandos'"),
        ]);

        let insights = engine.insights_for_customer_on(1, today()).unwrap();
        assert_eq!(
            insights,
            vec![
                Insight::new("Your latest Vodafone bill is £40 more than previous months"),
                Insight::new(
                    "Your latest restaurants spend in Nandos' is £40 less than previous months"
                ),
                Insight::new("You've spent £60 in restaurants this month"),
            ]
        );
    }

    #[test]
    fn test_only_relevant_spend_by_category() {
        let amount = Decimal::new(10000, 2);
        let engine = engine_with(vec![
            tx(3, Decimal::new(200, 2), today(), "restaurants", "relevant"),
            tx(1, amount, months_ago(1), "bill", "a"),
            tx(2, amount, today(), "bill", "b"),
        ]);

        assert_eq!(
            engine.insights_for_customer_on(1, today()).unwrap(),
            vec![Insight::new("You've spent £2 in restaurants this month")]
        );
    }

    #[test]
    fn test_history_outside_twelve_months_is_ignored() {
        let engine = engine_with(vec![
            tx(1, Decimal::new(500, 0), months_ago(18), "bill", "Vodafone"),
            tx(2, Decimal::new(60, 0), today(), "bill", "Vodafone"),
        ]);

        assert!(engine.insights_for_customer_on(1, today()).unwrap().is_empty());
    }

    #[test]
    fn test_bill_lower_than_two_previous_months() {
        let higher = Decimal::new(10000, 2);
        let engine = engine_with(vec![
            tx(1, higher, months_ago(2), "bill", "Vodafone"),
            tx(2, higher, months_ago(1), "bill", "Vodafone"),
            tx(3, Decimal::new(6000, 2), today(), "bill", "Vodafone"),
        ]);

        assert_eq!(
            engine.insights_for_customer_on(1, today()).unwrap(),
            vec![Insight::new("Your latest Vodafone bill is £40 less than previous months")]
        );
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let engine = engine_with(vec![
            tx(1, Decimal::new(5000, 2), months_ago(2), "bill", "Vodafone"),
            tx(2, Decimal::new(5000, 2), months_ago(1), "bill", "Vodafone"),
            tx(3, Decimal::new(10000, 2), today(), "bill", "Vodafone"),
            tx(4, Decimal::new(30000, 2), today(), "restaurants", "Nandos'"),
            tx(5, Decimal::new(5000, 2), today(), "cafes", "Pret"),
        ]);

        let first = engine.insights_for_customer_on(1, today()).unwrap();
        let second = engine.insights_for_customer_on(1, today()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                Insight::new("Your latest Vodafone bill is £50 more than previous months"),
                Insight::new("You've spent £300 in restaurants this month"),
                Insight::new("You've spent £50 in cafes this month"),
            ]
        );
    }

    #[test]
    fn test_engine_over_database() {
        let db = Database::in_memory().unwrap();
        let customer_id = db.create_customer("Louise").unwrap();
        let new_tx = NewTransaction {
            date: chrono::Local::now().date_naive(),
            description: "description".to_string(),
            amount: Decimal::new(400000, 2),
            category: "RESTAURANTS".to_string(),
            vendor: "Nandos'".to_string(),
            import_hash: "engine_test_1".to_string(),
        };
        db.insert_transaction(customer_id, &new_tx).unwrap();

        let engine = InsightEngine::new(&db);
        assert_eq!(
            engine.insights_for_customer(customer_id).unwrap(),
            vec![Insight::new("You've spent £4000 in restaurants this month")]
        );
        assert!(matches!(
            engine.insights_for_customer(customer_id + 1),
            Err(Error::CustomerNotFound(_))
        ));
    }
}
