use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use crate::external::projections_provider::{
    ExpectedReturnsSeries, ProjectionsApiError, ProjectionsProvider,
};
use crate::models::ProjectionParams;

const DEFAULT_BASE_URL: &str = "https://api.nutmeg.com";

/// Percentiles requested from the pot service; the summarizer expects all
/// three to come back.
const REQUESTED_PERCENTILES: &str = "P5,P50,P95";

pub struct NutmegProvider {
    client: reqwest::Client,
    base_url: String,
}

impl NutmegProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("NUTMEG_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }
}

#[derive(Debug, Deserialize)]
struct ProspectsResponse {
    series: HashMap<String, ExpectedReturnsSeries>,
}

#[async_trait]
impl ProjectionsProvider for NutmegProvider {
    async fn fetch_prospects(
        &self,
        params: &ProjectionParams,
    ) -> Result<HashMap<String, ExpectedReturnsSeries>, ProjectionsApiError> {
        let url = format!(
            "{}/nm-pot-service/projections/{}/prospects",
            self.base_url,
            params.account_type.as_str()
        );

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("lumpSum", params.starting_amount.to_string()),
                ("contributions", params.monthly_contributions.to_string()),
                ("model", params.risk_level.as_str().to_string()),
                ("percentiles", REQUESTED_PERCENTILES.to_string()),
                ("timeframe", params.timeframe.to_string()),
                ("investmentStyle", params.investment_style.as_str().to_string()),
            ])
            .send()
            .await
            .map_err(|e| ProjectionsApiError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            // Pass the upstream failure through with its body as the message
            let message = resp.text().await.unwrap_or_default();
            return Err(ProjectionsApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp
            .json::<ProspectsResponse>()
            .await
            .map_err(|e| ProjectionsApiError::Parse(e.to_string()))?;

        Ok(body.series)
    }
}
