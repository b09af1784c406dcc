//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use super::layout::{DashboardLayout, DashboardOptions};
use crate::dataset::Dataset;
use crate::session::{HubConfig, SessionHub};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Launch table, read-only for the process lifetime
    pub dataset: Arc<Dataset>,
    /// Per-page filter sessions
    pub sessions: Arc<SessionHub>,
    /// Page layout, built once from the options and the dataset bounds
    pub layout: Arc<DashboardLayout>,
    /// Server configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: ApiConfig, hub_config: HubConfig) -> Self {
        let layout = DashboardLayout::build(&config.dashboard, &dataset);

        let unlisted: Vec<&str> = dataset
            .sites()
            .into_iter()
            .filter(|site| !config.dashboard.sites.iter().any(|s| s.as_str() == *site))
            .collect();
        if !unlisted.is_empty() {
            tracing::warn!(sites = ?unlisted, "Dataset sites missing from the dropdown");
        }

        Self {
            dataset,
            sessions: Arc::new(SessionHub::new(hub_config)),
            layout: Arc::new(layout),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Allow cross-origin requests from anywhere
    pub cors_permissive: bool,
    /// Dashboard controls
    pub dashboard: DashboardOptions,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            cors_permissive: true,
            dashboard: DashboardOptions::default(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
