//! Core data types for the launch dataset
//!
//! - `LaunchRecord`: one row of the launch table
//! - `OutcomeClass`: binary launch outcome
//! - `Dataset`: the immutable table plus its payload bounds
//! - `DatasetSummary`: per-site counts for the summary endpoint and CLI

use serde::{Deserialize, Serialize};

use super::error::{LoadError, LoadResult};

/// Binary launch outcome, stored as `0` / `1` in the CSV and on the wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(format!("class must be 0 or 1, got {}", other)),
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(outcome: OutcomeClass) -> Self {
        match outcome {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }
}

/// A single launch record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub booster_version: String,
    pub booster_version_category: String,
    pub outcome: OutcomeClass,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version: impl Into<String>,
        booster_version_category: impl Into<String>,
        outcome: OutcomeClass,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version: booster_version.into(),
            booster_version_category: booster_version_category.into(),
            outcome,
        }
    }
}

/// The loaded launch table
///
/// Built once at startup and shared read-only for the process lifetime.
/// Always holds at least one record, so the payload bounds are real values.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

impl Dataset {
    /// Build a dataset from records already in memory
    pub fn from_records(records: Vec<LaunchRecord>) -> LoadResult<Self> {
        if records.is_empty() {
            return Err(LoadError::EmptyDataset);
        }

        let min_payload = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let max_payload = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            records,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct launch sites in first-appearance order
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = Vec::new();
        for record in &self.records {
            if !sites.contains(&record.launch_site.as_str()) {
                sites.push(&record.launch_site);
            }
        }
        sites
    }

    /// Per-site launch and success counts
    pub fn summary(&self) -> DatasetSummary {
        let sites = self
            .sites()
            .into_iter()
            .map(|site| {
                let at_site = self.records.iter().filter(|r| r.launch_site == site);
                let (launches, successes) = at_site.fold((0, 0), |(n, s), r| {
                    (n + 1, s + usize::from(r.outcome.is_success()))
                });
                SiteSummary {
                    site: site.to_string(),
                    launches,
                    successes,
                }
            })
            .collect();

        DatasetSummary {
            rows: self.records.len(),
            min_payload: self.min_payload,
            max_payload: self.max_payload,
            sites,
        }
    }
}

/// Overview of the loaded dataset
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetSummary {
    pub rows: usize,
    pub min_payload: f64,
    pub max_payload: f64,
    pub sites: Vec<SiteSummary>,
}

/// Launch counts for one site
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSummary {
    pub site: String,
    pub launches: usize,
    pub successes: usize,
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} launches, payload {} - {} kg",
            self.rows, self.min_payload, self.max_payload
        )?;
        writeln!(f, "{:<16} {:>8} {:>9}", "SITE", "LAUNCHES", "SUCCESSES")?;
        for site in &self.sites {
            writeln!(
                f,
                "{:<16} {:>8} {:>9}",
                site.site, site.launches, site.successes
            )?;
        }
        Ok(())
    }
}
