use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::ProjectionParams;

/// One percentile's expected-returns series, monthly granularity.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedReturnsSeries {
    #[serde(rename = "expectedReturns")]
    pub expected_returns: Vec<f64>,
}

#[derive(Debug, Error)]
pub enum ProjectionsApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("parse error: {0}")]
    Parse(String),
}

#[async_trait]
pub trait ProjectionsProvider: Send + Sync {
    /// Fetch the percentile series for the given parameters, keyed by
    /// percentile label ("P5", "P50", "P95").
    async fn fetch_prospects(
        &self,
        params: &ProjectionParams,
    ) -> Result<HashMap<String, ExpectedReturnsSeries>, ProjectionsApiError>;
}
