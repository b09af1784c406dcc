//! Reactive View Model
//!
//! Pure recomputation of the dashboard outputs from a filter state.
//!
//! - [`filter`]: `FilterState` and the input events that change it
//! - [`pie`]: success/failure pie chart data
//! - [`scatter`]: payload vs. outcome scatter data
//! - [`figure`]: Plotly figure JSON for both charts
//! - [`callbacks`]: control-id → output table and dispatch

pub mod callbacks;
pub mod figure;
pub mod filter;
pub mod pie;
pub mod scatter;

pub use callbacks::{dispatch, render_all, ControlId, OutputId, OutputUpdate, CALLBACKS};
pub use filter::{FilterState, InputEvent, PayloadRange, SiteSelection, ALL_SITES};
pub use pie::{compute_pie_data, PieData, PieSlice};
pub use scatter::{compute_scatter_data, ScatterData, ScatterPoint};
