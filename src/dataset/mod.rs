//! Launch Dataset
//!
//! The in-memory launch table the dashboard filters. Loaded once at startup
//! from CSV and never mutated afterwards.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{LoadError, LoadResult};
pub use types::{Dataset, DatasetSummary, LaunchRecord, OutcomeClass, SiteSummary};
