//! Insights command implementation

use anyhow::Result;
use spendlens_core::{db::Database, insights::InsightEngine, Insight};

pub fn cmd_insights(db: &Database, customer_id: i64, json: bool) -> Result<()> {
    let insights = InsightEngine::new(db).insights_for_customer(customer_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
    } else {
        print_insights(customer_id, &insights);
    }

    Ok(())
}

pub(crate) fn print_insights(customer_id: i64, insights: &[Insight]) {
    println!();
    println!("💡 Insights for customer {}", customer_id);
    println!("   ─────────────────────────────");

    if insights.is_empty() {
        println!("   Nothing new to report.");
        return;
    }

    for insight in insights {
        println!("   • {}", insight);
    }
}
