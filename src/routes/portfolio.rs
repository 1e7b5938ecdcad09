use axum::{Json, extract::State};
use std::sync::Arc;

use crate::context::AppContext;
use crate::portfolio::Portfolio;

/// GET /api/portfolio
pub async fn get_portfolio(State(ctx): State<Arc<AppContext>>) -> Json<Portfolio> {
    Json(ctx.portfolio.as_ref().clone())
}
