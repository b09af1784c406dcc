//! Success Pie Chart
//!
//! Counts launch outcomes for the site dropdown selection.

use serde::Serialize;

use super::filter::SiteSelection;
use crate::dataset::Dataset;

pub const SUCCESS_LABEL: &str = "Success";
pub const FAILED_LABEL: &str = "Failed";

/// One labeled slice of the pie
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

impl PieSlice {
    fn new(label: impl Into<String>, value: usize) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Pie chart contents for one site selection
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieData {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieData {
    /// Value of the slice labeled `label`, if present
    pub fn value_of(&self, label: &str) -> Option<usize> {
        self.slices
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value)
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Compute the pie chart for a site selection.
///
/// `All` counts successful launches per site, in first-appearance order,
/// leaving out sites without a success. A single site yields exactly two
/// slices, `Success` and `Failed`. An unknown site yields two zero slices.
pub fn compute_pie_data(dataset: &Dataset, site: &SiteSelection) -> PieData {
    match site {
        SiteSelection::All => {
            let mut slices: Vec<PieSlice> = Vec::new();
            for record in dataset.records().iter().filter(|r| r.outcome.is_success()) {
                match slices.iter_mut().find(|s| s.label == record.launch_site) {
                    Some(slice) => slice.value += 1,
                    None => slices.push(PieSlice::new(record.launch_site.as_str(), 1)),
                }
            }

            PieData {
                title: "Total success launches by sites".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let (total, successes) = dataset
                .records()
                .iter()
                .filter(|r| &r.launch_site == name)
                .fold((0, 0), |(n, s), r| {
                    (n + 1, s + usize::from(r.outcome.is_success()))
                });

            PieData {
                title: format!("{} : Success vs. Failed", name),
                slices: vec![
                    PieSlice::new(SUCCESS_LABEL, successes),
                    PieSlice::new(FAILED_LABEL, total - successes),
                ],
            }
        }
    }
}
