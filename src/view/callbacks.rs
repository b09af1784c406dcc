//! Callback Table
//!
//! Maps input controls to the output regions they drive. Each entry is a
//! pure function of the dataset and a session's filter state; dispatch runs
//! them synchronously in table order.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::filter::FilterState;
use super::pie::compute_pie_data;
use super::scatter::compute_scatter_data;
use crate::dataset::Dataset;

/// Input control element ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
}

impl ControlId {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output region element ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputId {
    #[serde(rename = "success-pie-chart")]
    SuccessPieChart,
    #[serde(rename = "success-payload-scatter-chart")]
    SuccessPayloadScatterChart,
}

impl OutputId {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl std::fmt::Display for OutputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output region and the inputs that trigger its recomputation
pub struct Callback {
    pub output: OutputId,
    pub inputs: &'static [ControlId],
    pub compute: fn(&Dataset, &FilterState) -> Value,
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("output", &self.output)
            .field("inputs", &self.inputs)
            .finish()
    }
}

fn pie_chart(dataset: &Dataset, state: &FilterState) -> Value {
    compute_pie_data(dataset, &state.site).to_figure()
}

fn scatter_chart(dataset: &Dataset, state: &FilterState) -> Value {
    compute_scatter_data(dataset, &state.site, state.payload_range).to_figure()
}

pub static CALLBACKS: &[Callback] = &[
    Callback {
        output: OutputId::SuccessPieChart,
        inputs: &[ControlId::SiteDropdown],
        compute: pie_chart,
    },
    Callback {
        output: OutputId::SuccessPayloadScatterChart,
        inputs: &[ControlId::SiteDropdown, ControlId::PayloadSlider],
        compute: scatter_chart,
    },
];

/// A recomputed output region
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutputUpdate {
    pub id: OutputId,
    pub figure: Value,
}

/// Recompute every output that depends on `changed`
pub fn dispatch(dataset: &Dataset, state: &FilterState, changed: ControlId) -> Vec<OutputUpdate> {
    CALLBACKS
        .iter()
        .filter(|cb| cb.inputs.contains(&changed))
        .map(|cb| run(cb, dataset, state))
        .collect()
}

/// Recompute every output, for the first render of a session
pub fn render_all(dataset: &Dataset, state: &FilterState) -> Vec<OutputUpdate> {
    CALLBACKS.iter().map(|cb| run(cb, dataset, state)).collect()
}

fn run(callback: &Callback, dataset: &Dataset, state: &FilterState) -> OutputUpdate {
    tracing::debug!(output = %callback.output, site = %state.site, "Recomputing output");
    OutputUpdate {
        id: callback.output,
        figure: (callback.compute)(dataset, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, OutcomeClass};
    use crate::view::filter::{InputEvent, PayloadRange, SiteSelection};

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A", 1000.0, "F9 v1.1 B1011", "v1.1", OutcomeClass::Success),
            LaunchRecord::new("B", 3000.0, "F9 FT B1021", "FT", OutcomeClass::Failure),
        ])
        .unwrap()
    }

    #[test]
    fn test_site_change_updates_both_outputs() {
        let dataset = dataset();
        let state = FilterState::default_for(&dataset);

        let updates = dispatch(&dataset, &state, ControlId::SiteDropdown);
        let ids: Vec<OutputId> = updates.iter().map(|u| u.id).collect();
        assert_eq!(
            ids,
            vec![OutputId::SuccessPieChart, OutputId::SuccessPayloadScatterChart]
        );
    }

    #[test]
    fn test_slider_change_updates_scatter_only() {
        let dataset = dataset();
        let state = FilterState::default_for(&dataset);

        let updates = dispatch(&dataset, &state, ControlId::PayloadSlider);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].id, OutputId::SuccessPayloadScatterChart);
    }

    #[test]
    fn test_dispatch_uses_current_state() {
        let dataset = dataset();
        let mut state = FilterState::default_for(&dataset);
        let changed = state.apply(InputEvent::SiteDropdown(SiteSelection::from("B")));
        state.apply(InputEvent::PayloadSlider(PayloadRange::new(0.0, 5000.0)));

        let updates = dispatch(&dataset, &state, changed);
        assert_eq!(
            updates[0].figure["layout"]["title"]["text"],
            "B : Success vs. Failed"
        );
        assert_eq!(updates[1].figure["data"][0]["x"], serde_json::json!([3000.0]));
    }

    #[test]
    fn test_render_all() {
        let dataset = dataset();
        let updates = render_all(&dataset, &FilterState::default_for(&dataset));
        assert_eq!(updates.len(), CALLBACKS.len());
    }

    #[test]
    fn test_id_serialization() {
        assert_eq!(
            serde_json::to_string(&ControlId::SiteDropdown).unwrap(),
            "\"site-dropdown\""
        );
        assert_eq!(
            serde_json::to_string(&OutputId::SuccessPayloadScatterChart).unwrap(),
            "\"success-payload-scatter-chart\""
        );
        let parsed: ControlId = serde_json::from_str("\"payload-slider\"").unwrap();
        assert_eq!(parsed, ControlId::PayloadSlider);
    }
}
