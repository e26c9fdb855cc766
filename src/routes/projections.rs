use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{ProjectionParams, ProjectionSummary};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_projections))
}

#[derive(Debug, Deserialize)]
struct ProjectionsQuery {
    starting_amount: i64,
    monthly_contributions: i64,
    timeframe: i64,
    investment_style: String,
    risk_level: String,
    account_type: String,
}

async fn get_projections(
    State(state): State<AppState>,
    Query(query): Query<ProjectionsQuery>,
) -> Result<Json<ProjectionSummary>, AppError> {
    info!(
        "GET /projections - {} lump sum over {} years",
        query.starting_amount, query.timeframe
    );

    let params = ProjectionParams::new(
        query.starting_amount,
        query.monthly_contributions,
        query.timeframe,
        &query.investment_style,
        &query.risk_level,
        &query.account_type,
    )?;

    let summary =
        services::projection_service::fetch_summary(state.projections_provider.as_ref(), &params)
            .await
            .map_err(|e| {
                error!("Failed to fetch projections: {}", e);
                e
            })?;

    Ok(Json(summary))
}
