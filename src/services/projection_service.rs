use std::collections::HashMap;

use crate::errors::AppError;
use crate::external::projections_provider::{
    ExpectedReturnsSeries, ProjectionsApiError, ProjectionsProvider,
};
use crate::models::{ProjectionBand, ProjectionParams, ProjectionSummary};

// Month 12 of the expected-returns series marks the end of year one.
const YEAR_ONE_INDEX: usize = 12;

pub async fn fetch_summary(
    provider: &dyn ProjectionsProvider,
    params: &ProjectionParams,
) -> Result<ProjectionSummary, AppError> {
    let series = provider.fetch_prospects(params).await.map_err(|e| match e {
        ProjectionsApiError::Upstream { status, message } => {
            AppError::Upstream { status, message }
        }
        other => AppError::External(other.to_string()),
    })?;

    summarize(&series)
}

pub fn summarize(
    series: &HashMap<String, ExpectedReturnsSeries>,
) -> Result<ProjectionSummary, AppError> {
    let projections = expected_returns(series, "P50")?;
    let low = expected_returns(series, "P5")?;
    let high = expected_returns(series, "P95")?;

    let year_one_end = ProjectionBand {
        projection: point_at(projections, YEAR_ONE_INDEX, "P50")?,
        low_projection: point_at(low, YEAR_ONE_INDEX, "P5")?,
        high_projection: point_at(high, YEAR_ONE_INDEX, "P95")?,
    };
    let timeframe_end = ProjectionBand {
        projection: last_point(projections, "P50")?,
        low_projection: last_point(low, "P5")?,
        high_projection: last_point(high, "P95")?,
    };

    Ok(ProjectionSummary {
        year_one_end,
        timeframe_end,
    })
}

fn expected_returns<'a>(
    series: &'a HashMap<String, ExpectedReturnsSeries>,
    percentile: &str,
) -> Result<&'a [f64], AppError> {
    series
        .get(percentile)
        .map(|s| s.expected_returns.as_slice())
        .ok_or_else(|| {
            AppError::External(format!("upstream series missing percentile {}", percentile))
        })
}

fn point_at(series: &[f64], index: usize, percentile: &str) -> Result<f64, AppError> {
    series.get(index).copied().ok_or_else(|| {
        AppError::External(format!(
            "upstream {} series has no entry at month {}",
            percentile, index
        ))
    })
}

fn last_point(series: &[f64], percentile: &str) -> Result<f64, AppError> {
    series.last().copied().ok_or_else(|| {
        AppError::External(format!("upstream {} series is empty", percentile))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectionParams;
    use async_trait::async_trait;

    fn fixture_series(year_one: f64, end: f64) -> ExpectedReturnsSeries {
        let mut values = vec![0.0; YEAR_ONE_INDEX];
        values.push(year_one);
        values.push(end);
        ExpectedReturnsSeries {
            expected_returns: values,
        }
    }

    fn fixture() -> HashMap<String, ExpectedReturnsSeries> {
        HashMap::from([
            ("P50".to_string(), fixture_series(646.0, 960.0)),
            ("P5".to_string(), fixture_series(569.0, 799.0)),
            ("P95".to_string(), fixture_series(735.0, 1163.0)),
        ])
    }

    #[test]
    fn test_summarize_reads_year_one_and_final_month() {
        let summary = summarize(&fixture()).unwrap();
        assert_eq!(summary.year_one_end.projection, 646.0);
        assert_eq!(summary.year_one_end.low_projection, 569.0);
        assert_eq!(summary.year_one_end.high_projection, 735.0);
        assert_eq!(summary.timeframe_end.projection, 960.0);
        assert_eq!(summary.timeframe_end.low_projection, 799.0);
        assert_eq!(summary.timeframe_end.high_projection, 1163.0);
    }

    #[test]
    fn test_summarize_rejects_missing_percentile() {
        let mut series = fixture();
        series.remove("P95");
        let err = summarize(&series).unwrap_err();
        assert!(err.to_string().contains("missing percentile P95"));
    }

    #[test]
    fn test_summarize_rejects_series_shorter_than_one_year() {
        let mut series = fixture();
        series.insert(
            "P50".to_string(),
            ExpectedReturnsSeries {
                expected_returns: vec![500.0, 505.0],
            },
        );
        let err = summarize(&series).unwrap_err();
        assert!(err.to_string().contains("no entry at month 12"));
    }

    struct FailingProvider;

    #[async_trait]
    impl ProjectionsProvider for FailingProvider {
        async fn fetch_prospects(
            &self,
            _params: &ProjectionParams,
        ) -> Result<HashMap<String, ExpectedReturnsSeries>, ProjectionsApiError> {
            Err(ProjectionsApiError::Upstream {
                status: 500,
                message: "Internal Server Error".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_upstream_failure_keeps_status_and_message() {
        let params = ProjectionParams::new(500, 10, 3, "FIXED", "MC", "ISA").unwrap();
        let err = fetch_summary(&FailingProvider, &params).await.unwrap_err();
        match err {
            AppError::Upstream { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
