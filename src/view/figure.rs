//! Plotly Figures
//!
//! Converts chart data into Plotly.js figure JSON (`{data, layout}`). The
//! page hands these straight to `Plotly.react`.

use serde_json::{json, Value};

use super::pie::PieData;
use super::scatter::ScatterData;

impl PieData {
    pub fn to_figure(&self) -> Value {
        let labels: Vec<&str> = self.slices.iter().map(|s| s.label.as_str()).collect();
        let values: Vec<usize> = self.slices.iter().map(|s| s.value).collect();

        json!({
            "data": [{
                "type": "pie",
                "labels": labels,
                "values": values,
            }],
            "layout": {
                "title": { "text": self.title },
            },
        })
    }
}

impl ScatterData {
    /// One marker trace per booster version category, so Plotly colours
    /// points by category.
    pub fn to_figure(&self) -> Value {
        let traces: Vec<Value> = self
            .categories()
            .into_iter()
            .map(|category| {
                let points = self
                    .points
                    .iter()
                    .filter(|p| p.booster_version_category == category);

                let (mut x, mut y, mut boosters) = (Vec::new(), Vec::new(), Vec::new());
                for point in points {
                    x.push(point.payload_mass_kg);
                    y.push(u8::from(point.outcome));
                    boosters.push(point.booster_version.as_str());
                }

                json!({
                    "type": "scatter",
                    "mode": "markers",
                    "name": category,
                    "legendgroup": category,
                    "x": x,
                    "y": y,
                    "customdata": boosters,
                    "hovertemplate": format!(
                        "Booster Version Category={}<br>Payload Mass (kg)=%{{x}}<br>class=%{{y}}<br>Booster Version=%{{customdata}}<extra></extra>",
                        category
                    ),
                })
            })
            .collect();

        json!({
            "data": traces,
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": "Payload Mass (kg)" } },
                "yaxis": { "title": { "text": "class" } },
                "legend": { "title": { "text": "Booster Version Category" } },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::{Dataset, LaunchRecord, OutcomeClass};
    use crate::view::filter::{PayloadRange, SiteSelection};
    use crate::view::pie::compute_pie_data;
    use crate::view::scatter::compute_scatter_data;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("A", 1000.0, "F9 v1.1 B1011", "v1.1", OutcomeClass::Success),
            LaunchRecord::new("B", 3000.0, "F9 FT B1021", "FT", OutcomeClass::Failure),
            LaunchRecord::new("A", 4000.0, "F9 v1.1 B1012", "v1.1", OutcomeClass::Failure),
        ])
        .unwrap()
    }

    #[test]
    fn test_pie_figure() {
        let figure = compute_pie_data(&dataset(), &SiteSelection::from("A")).to_figure();

        assert_eq!(figure["data"][0]["type"], "pie");
        assert_eq!(figure["data"][0]["labels"][0], "Success");
        assert_eq!(figure["data"][0]["values"][1], 1);
        assert_eq!(figure["layout"]["title"]["text"], "A : Success vs. Failed");
    }

    #[test]
    fn test_scatter_figure_traces_per_category() {
        let figure = compute_scatter_data(
            &dataset(),
            &SiteSelection::All,
            PayloadRange::new(0.0, 10000.0),
        )
        .to_figure();

        let traces = figure["data"].as_array().unwrap();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["name"], "v1.1");
        assert_eq!(traces[0]["x"], serde_json::json!([1000.0, 4000.0]));
        assert_eq!(traces[0]["y"], serde_json::json!([1, 0]));
        assert_eq!(traces[0]["customdata"][1], "F9 v1.1 B1012");
        assert_eq!(traces[1]["name"], "FT");
        assert_eq!(figure["layout"]["xaxis"]["title"]["text"], "Payload Mass (kg)");
    }

    #[test]
    fn test_empty_scatter_figure() {
        let figure = compute_scatter_data(
            &dataset(),
            &SiteSelection::from("nowhere"),
            PayloadRange::new(0.0, 10000.0),
        )
        .to_figure();

        assert_eq!(figure["data"].as_array().unwrap().len(), 0);
        assert_eq!(
            figure["layout"]["title"]["text"],
            "Correlation between Payload and Success for site nowhere"
        );
    }
}
