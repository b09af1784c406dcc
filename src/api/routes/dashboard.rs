//! Dashboard Description Routes
//!
//! - GET /api/v1/layout - Controls and output regions of the page
//! - GET /api/v1/dataset - Row count, payload bounds and per-site counts

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::layout::DashboardLayout;
use crate::api::state::AppState;
use crate::dataset::DatasetSummary;

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(state.layout.as_ref().clone())
}

/// GET /api/v1/dataset
pub async fn get_dataset_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(state.dataset.summary())
}
