//! Demo command implementation
//!
//! Seeds customers 1 and 2 with a year of history ending today, then prints
//! their insights.

use anyhow::{Context, Result};
use chrono::{Days, Local, Months, NaiveDate};
use rust_decimal::Decimal;
use spendlens_core::{db::Database, insights::InsightEngine, models::NewTransaction};
use tracing::info;

use super::insights::print_insights;

/// Demo customers: (id, name)
pub const DEMO_CUSTOMERS: [(i64, &str); 2] = [(1, "Louise Demo"), (2, "Sam Demo")];

/// One seeded row: months back, days back within that month, pence, category, vendor
type DemoRow = (u32, u64, i64, &'static str, &'static str);

const LOUISE: &[DemoRow] = &[
    (5, 0, 4000, "bill", "Vodafone"),
    (4, 0, 4000, "bill", "Vodafone"),
    (3, 0, 4000, "bill", "Vodafone"),
    (2, 0, 4000, "bill", "Vodafone"),
    (1, 0, 4000, "bill", "Vodafone"),
    (0, 0, 5500, "bill", "Vodafone"),
    (1, 3, 9000, "restaurants", "Nandos'"),
    (0, 1, 6000, "restaurants", "Nandos'"),
    (0, 2, 4250, "restaurants", "Dishoom"),
    (0, 0, 320, "cafes", "Pret"),
];

const SAM: &[DemoRow] = &[
    (3, 0, 11000, "bill", "EDF"),
    (2, 0, 9500, "bill", "EDF"),
    (1, 0, 9500, "bill", "EDF"),
    (0, 0, 8000, "bill", "EDF"),
    (0, 0, 3500, "bill", "Thames Water"),
    (0, 1, 6420, "groceries", "Tesco"),
    (0, 3, 2815, "groceries", "Sainsbury's"),
];

/// Seed the demo customers relative to `today`
///
/// Customers that already have transactions are left alone. Returns the
/// number of transactions written.
pub fn seed_demo(db: &Database, today: NaiveDate) -> Result<usize> {
    let mut written = 0;

    for ((id, name), rows) in DEMO_CUSTOMERS.into_iter().zip([LOUISE, SAM]) {
        db.ensure_customer(id, name)?;
        if db.count_transactions(Some(id))? > 0 {
            info!(customer_id = id, "Demo customer already seeded");
            continue;
        }

        for (n, row) in rows.iter().enumerate() {
            let tx = demo_transaction(id, n, row, today)?;
            if db.insert_transaction(id, &tx)?.is_some() {
                written += 1;
            }
        }
    }

    Ok(written)
}

fn demo_transaction(
    customer_id: i64,
    n: usize,
    &(months, days, pence, category, vendor): &DemoRow,
    today: NaiveDate,
) -> Result<NewTransaction> {
    let date = today
        .checked_sub_months(Months::new(months))
        .and_then(|d| d.checked_sub_days(Days::new(days)))
        .with_context(|| format!("Demo date out of range for {}", today))?;

    Ok(NewTransaction {
        date,
        description: format!("{} {}", vendor, category),
        amount: Decimal::new(pence, 2),
        category: category.to_string(),
        vendor: vendor.to_string(),
        import_hash: format!("demo-{}-{}-{}", customer_id, n, date),
    })
}

pub fn cmd_demo(db: &Database) -> Result<()> {
    let today = Local::now().date_naive();
    let written = seed_demo(db, today)?;
    println!("🌱 Seeded {} demo transactions", written);

    let engine = InsightEngine::new(db);
    for (id, _) in DEMO_CUSTOMERS {
        let insights = engine.insights_for_customer_on(id, today)?;
        print_insights(id, &insights);
    }

    Ok(())
}
