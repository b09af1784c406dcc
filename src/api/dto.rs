//! Data Transfer Objects
//!
//! Request and response types for the HTTP endpoints.

use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};

/// Query string of the chart endpoints
///
/// Numbers arrive as raw strings so bad input maps to a JSON validation
/// error rather than a bare extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    /// Site name or `ALL` (default)
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound (default: dataset minimum)
    #[serde(default)]
    pub low: Option<String>,
    /// Upper payload bound (default: dataset maximum)
    #[serde(default)]
    pub high: Option<String>,
    /// `data` (default) or `figure`
    #[serde(default)]
    pub format: Option<String>,
}

/// Response shape of the chart endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Data,
    Figure,
}

impl ChartQuery {
    pub fn format(&self) -> ApiResult<ChartFormat> {
        match self.format.as_deref() {
            None | Some("data") => Ok(ChartFormat::Data),
            Some("figure") => Ok(ChartFormat::Figure),
            Some(other) => Err(ApiError::Validation(format!(
                "Invalid format: {}. Use data or figure",
                other
            ))),
        }
    }

    /// Parse a bound, falling back to `default` when absent
    pub fn bound(value: Option<&str>, name: &str, default: f64) -> ApiResult<f64> {
        match value {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    ApiError::Validation(format!("{} must be a number, got '{}'", name, raw))
                }),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Rows in the loaded dataset
    pub rows: usize,
    /// Active dashboard sessions
    pub sessions: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_parsing() {
        assert_eq!(ChartQuery::bound(None, "low", 5.0).unwrap(), 5.0);
        assert_eq!(ChartQuery::bound(Some("2500"), "low", 0.0).unwrap(), 2500.0);
        assert!(ChartQuery::bound(Some("heavy"), "low", 0.0).is_err());
        assert!(ChartQuery::bound(Some("inf"), "high", 0.0).is_err());
    }

    #[test]
    fn test_format() {
        let query = ChartQuery::default();
        assert_eq!(query.format().unwrap(), ChartFormat::Data);

        let query = ChartQuery {
            format: Some("figure".to_string()),
            ..Default::default()
        };
        assert_eq!(query.format().unwrap(), ChartFormat::Figure);

        let query = ChartQuery {
            format: Some("svg".to_string()),
            ..Default::default()
        };
        assert!(query.format().is_err());
    }
}
