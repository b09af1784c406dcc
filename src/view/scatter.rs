//! Payload vs. Success Scatter Chart
//!
//! Selects the launches inside the payload slider range for the chosen site.

use serde::Serialize;

use super::filter::{PayloadRange, SiteSelection};
use crate::dataset::{Dataset, LaunchRecord, OutcomeClass};

/// One plotted launch: x = payload, y = outcome class
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: OutcomeClass,
    pub booster_version: String,
    pub booster_version_category: String,
}

impl From<&LaunchRecord> for ScatterPoint {
    fn from(record: &LaunchRecord) -> Self {
        Self {
            payload_mass_kg: record.payload_mass_kg,
            outcome: record.outcome,
            booster_version: record.booster_version.clone(),
            booster_version_category: record.booster_version_category.clone(),
        }
    }
}

/// Scatter chart contents for one filter state
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterData {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterData {
    /// Booster version categories in first-appearance order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for point in &self.points {
            if !categories.contains(&point.booster_version_category.as_str()) {
                categories.push(&point.booster_version_category);
            }
        }
        categories
    }
}

/// Compute the scatter chart for a site selection and payload range.
///
/// A launch is kept when `low < payload < high`; launches exactly on either
/// bound are dropped. Points keep dataset order.
pub fn compute_scatter_data(
    dataset: &Dataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterData {
    let points = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg) && site.matches(&r.launch_site))
        .map(ScatterPoint::from)
        .collect();

    let title = match site {
        SiteSelection::All => "Correlation between Payload and Success for all sites".to_string(),
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for site {}", name)
        }
    };

    ScatterData { title, points }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A", 0.0, "F9 v1.0 B0003", "v1.0", OutcomeClass::Failure),
            LaunchRecord::new("A", 2500.0, "F9 v1.1 B1011", "v1.1", OutcomeClass::Success),
            LaunchRecord::new("B", 4000.0, "F9 FT B1021", "FT", OutcomeClass::Success),
            LaunchRecord::new("B", 5000.0, "F9 FT B1022", "FT", OutcomeClass::Failure),
            LaunchRecord::new("A", 9600.0, "F9 B4 B1041", "B4", OutcomeClass::Success),
        ])
        .unwrap()
    }

    fn payloads(data: &ScatterData) -> Vec<f64> {
        data.points.iter().map(|p| p.payload_mass_kg).collect()
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let data = compute_scatter_data(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(2500.0, 5000.0),
        );

        assert_eq!(payloads(&data), vec![4000.0]);
    }

    #[test]
    fn test_full_range_drops_min_and_max() {
        let dataset = dataset();
        let full = PayloadRange::new(dataset.min_payload(), dataset.max_payload());
        let data = compute_scatter_data(&dataset, &SiteSelection::All, full);

        assert_eq!(payloads(&data), vec![2500.0, 4000.0, 5000.0]);
    }

    #[test]
    fn test_site_filter() {
        let data = compute_scatter_data(
            &dataset(),
            &SiteSelection::from("B"),
            PayloadRange::new(0.0, 10000.0),
        );

        assert_eq!(payloads(&data), vec![4000.0, 5000.0]);
        assert_eq!(
            data.title,
            "Correlation between Payload and Success for site B"
        );
    }

    #[test]
    fn test_all_sites_title() {
        let data = compute_scatter_data(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 10000.0),
        );

        assert_eq!(
            data.title,
            "Correlation between Payload and Success for all sites"
        );
        assert_eq!(data.points.len(), 4);
    }

    #[test]
    fn test_every_point_strictly_inside_range() {
        let dataset = dataset();
        for (low, high) in [(0.0, 2500.0), (1000.0, 9600.0), (2500.0, 2500.0), (0.0, 10000.0)] {
            let data =
                compute_scatter_data(&dataset, &SiteSelection::All, PayloadRange::new(low, high));
            for point in &data.points {
                assert!(point.payload_mass_kg > low && point.payload_mass_kg < high);
            }
        }
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let data = compute_scatter_data(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(8000.0, 1000.0),
        );
        assert!(data.points.is_empty());
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let data = compute_scatter_data(
            &dataset(),
            &SiteSelection::from("Z"),
            PayloadRange::new(0.0, 10000.0),
        );
        assert!(data.points.is_empty());
    }

    #[test]
    fn test_point_metadata_and_categories() {
        let data = compute_scatter_data(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 10000.0),
        );

        assert_eq!(data.points[0].booster_version, "F9 v1.1 B1011");
        assert_eq!(data.points[0].outcome, OutcomeClass::Success);
        assert_eq!(data.categories(), vec!["v1.1", "FT", "B4"]);
    }

    #[test]
    fn test_pure_function() {
        let dataset = dataset();
        let site = SiteSelection::from("A");
        let range = PayloadRange::new(100.0, 9000.0);
        assert_eq!(
            compute_scatter_data(&dataset, &site, range),
            compute_scatter_data(&dataset, &site, range)
        );
    }
}
