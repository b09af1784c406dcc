//! # Launchboard
//!
//! Launch Records Dashboard - an interactive dashboard over launch outcome
//! data, with a site dropdown and a payload range slider driving a success
//! pie chart and a payload/success scatter plot.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the immutable launch table
//! - [`view`]: filter state, chart computations and the callback table
//! - [`session`]: per-page filter sessions over WebSocket
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::dataset::Dataset;
//! use launchboard::view::{compute_pie_data, compute_scatter_data, PayloadRange, SiteSelection};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load(Path::new("spacex_launch_dash.csv"))?;
//!
//!     let pie = compute_pie_data(&dataset, &SiteSelection::from("KSC LC-39A"));
//!     println!("{}: {:?}", pie.title, pie.slices);
//!
//!     let range = PayloadRange::new(2000.0, 8000.0);
//!     let scatter = compute_scatter_data(&dataset, &SiteSelection::All, range);
//!     println!("{} launches between 2000 and 8000 kg", scatter.points.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dataset;
pub mod session;
pub mod view;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState, DashboardLayout, DashboardOptions};

pub use config::{Config, ConfigError, LoggingConfig};

pub use dataset::{Dataset, DatasetSummary, LaunchRecord, LoadError, OutcomeClass};

pub use session::{ClientMessage, HubConfig, ServerMessage, SessionError, SessionHub};

pub use view::{
    compute_pie_data, compute_scatter_data, ControlId, FilterState, InputEvent, OutputId,
    PayloadRange, PieData, ScatterData, SiteSelection,
};
