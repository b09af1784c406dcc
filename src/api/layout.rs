//! Dashboard Layout
//!
//! Describes the page: title, site dropdown, payload range slider and the
//! two chart regions. The HTML page and `GET /api/v1/layout` are both
//! rendered from this.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::view::{ControlId, OutputId, PayloadRange, ALL_SITES, CALLBACKS};

/// Configurable parts of the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardOptions {
    #[serde(default = "default_title")]
    pub title: String,

    /// Dropdown site list, in display order
    #[serde(default = "default_sites")]
    pub sites: Vec<String>,

    #[serde(default = "default_slider_min")]
    pub slider_min: f64,

    #[serde(default = "default_slider_max")]
    pub slider_max: f64,

    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
}

fn default_title() -> String {
    "SpaceX Launch Records Dashboard".to_string()
}

fn default_sites() -> Vec<String> {
    ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_slider_min() -> f64 {
    0.0
}

fn default_slider_max() -> f64 {
    10_000.0
}

fn default_slider_step() -> f64 {
    1_000.0
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            sites: default_sites(),
            slider_min: default_slider_min(),
            slider_max: default_slider_max(),
            slider_step: default_slider_step(),
        }
    }
}

/// Full page description
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardLayout {
    pub title: String,
    pub dropdown: DropdownLayout,
    pub slider: RangeSliderLayout,
    pub outputs: Vec<OutputId>,
}

/// Single-select site control
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DropdownLayout {
    pub id: ControlId,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Dual-handle payload range control
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RangeSliderLayout {
    pub id: ControlId,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initial handle positions: the dataset payload bounds
    pub value: PayloadRange,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl DashboardLayout {
    pub fn build(options: &DashboardOptions, dataset: &Dataset) -> Self {
        let mut dropdown_options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        dropdown_options.extend(options.sites.iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        Self {
            title: options.title.clone(),
            dropdown: DropdownLayout {
                id: ControlId::SiteDropdown,
                options: dropdown_options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            slider: RangeSliderLayout {
                id: ControlId::PayloadSlider,
                min: options.slider_min,
                max: options.slider_max,
                step: options.slider_step,
                marks: quarter_marks(options.slider_min, options.slider_max),
                value: PayloadRange::new(dataset.min_payload(), dataset.max_payload()),
            },
            outputs: CALLBACKS.iter().map(|cb| cb.output).collect(),
        }
    }
}

/// Marks at the ends and quarter points of the slider
fn quarter_marks(min: f64, max: f64) -> Vec<SliderMark> {
    (0..=4)
        .map(|i| {
            let value = min + (max - min) * f64::from(i) / 4.0;
            SliderMark {
                value,
                label: format_number(value),
            }
        })
        .collect()
}

/// Whole numbers without a trailing `.0`
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
