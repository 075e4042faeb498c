//! Insight handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::{AppError, AppState};
use spendlens_core::insights::{Insight, InsightEngine};

/// GET /api/v1/customer/insights/:id - Spending insights for a customer
///
/// Returns bill-tracking insights followed by spend-by-category insights.
/// A customer with no transactions at all is a 404.
pub async fn get_customer_insights(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<Insight>>, AppError> {
    let customer_id = parse_customer_id(&raw_id)?;

    let engine = InsightEngine::new(&state.db);
    let insights = engine.insights_for_customer(customer_id)?;

    debug!(customer_id, count = insights.len(), "Served insights");
    Ok(Json(insights))
}

fn parse_customer_id(raw_id: &str) -> Result<i64, AppError> {
    let customer_id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::bad_request("Customer id must be a number"))?;
    if customer_id <= 0 {
        return Err(AppError::bad_request("Customer id must be greater than 0"));
    }
    Ok(customer_id)
}
