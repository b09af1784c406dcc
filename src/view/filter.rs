//! Filter State
//!
//! The two user-controlled inputs of a dashboard session and the events that
//! change them.

use serde::{Deserialize, Serialize};

use super::callbacks::ControlId;
use crate::dataset::Dataset;

/// Dropdown value meaning "every site"
pub const ALL_SITES: &str = "ALL";

/// Site dropdown value
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record at `site` passes this selection
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload slider value, serialized as `[low, high]`
///
/// Stored exactly as received. The slider keeps `low <= high`, but an
/// inverted range is still representable and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Exclusive on both ends: payloads equal to `low` or `high` are outside.
    pub fn contains(&self, payload: f64) -> bool {
        payload > self.low && payload < self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

/// Current filter inputs of one dashboard session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl FilterState {
    /// Initial state: all sites, full payload span of the dataset
    pub fn default_for(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(dataset.min_payload(), dataset.max_payload()),
        }
    }

    /// Apply an input event in place, returning the control that changed
    pub fn apply(&mut self, event: InputEvent) -> ControlId {
        match event {
            InputEvent::SiteDropdown(site) => {
                self.site = site;
                ControlId::SiteDropdown
            }
            InputEvent::PayloadSlider(range) => {
                if range.is_inverted() {
                    tracing::debug!(low = range.low, high = range.high, "Inverted payload range");
                }
                self.payload_range = range;
                ControlId::PayloadSlider
            }
        }
    }
}

/// A change to one of the input controls
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    SiteDropdown(SiteSelection),
    PayloadSlider(PayloadRange),
}
