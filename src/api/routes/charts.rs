//! Chart Routes
//!
//! Stateless access to the two chart computations, for scripts and for
//! clients that keep their own filter state.
//!
//! - GET /api/v1/charts/pie?site=ALL
//! - GET /api/v1/charts/scatter?site=ALL&low=0&high=10000
//!
//! Both accept `format=figure` to get Plotly figure JSON instead of data.

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::dto::{ChartFormat, ChartQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::view::{compute_pie_data, compute_scatter_data, PayloadRange, SiteSelection};

/// GET /api/v1/charts/pie
pub async fn pie_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> ApiResult<Json<Value>> {
    let format = query.format()?;
    let site = site_of(&query);

    let pie = compute_pie_data(&state.dataset, &site);
    tracing::debug!(site = %site, slices = pie.slices.len(), "Computed pie chart");

    let body = match format {
        ChartFormat::Data => serde_json::to_value(&pie),
        ChartFormat::Figure => Ok(pie.to_figure()),
    };
    body.map(Json)
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// GET /api/v1/charts/scatter
pub async fn scatter_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ChartQuery>,
) -> ApiResult<Json<Value>> {
    let format = query.format()?;
    let site = site_of(&query);
    let low = ChartQuery::bound(query.low.as_deref(), "low", state.dataset.min_payload())?;
    let high = ChartQuery::bound(query.high.as_deref(), "high", state.dataset.max_payload())?;

    let scatter = compute_scatter_data(&state.dataset, &site, PayloadRange::new(low, high));
    tracing::debug!(
        site = %site,
        low,
        high,
        points = scatter.points.len(),
        "Computed scatter chart"
    );

    let body = match format {
        ChartFormat::Data => serde_json::to_value(&scatter),
        ChartFormat::Figure => Ok(scatter.to_figure()),
    };
    body.map(Json)
        .map_err(|e| ApiError::Internal(e.to_string()))
}

fn site_of(query: &ChartQuery) -> SiteSelection {
    query
        .site
        .as_deref()
        .map(SiteSelection::from)
        .unwrap_or_default()
}
