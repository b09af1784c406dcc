//! Dashboard Page
//!
//! GET / - Server-rendered page. Plotly.js draws the charts; the inline
//! script sends control changes over `/ws` and redraws whatever outputs
//! come back.

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::layout::{format_number, DashboardLayout};
use crate::api::state::AppState;
use crate::view::{OutputId, CALLBACKS};

/// GET /
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.layout))
}

/// Fill the page template from the layout
pub fn render_page(layout: &DashboardLayout) -> String {
    let options: String = layout
        .dropdown
        .options
        .iter()
        .map(|o| {
            let selected = if o.value == layout.dropdown.value {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                escape_html(&o.value),
                selected,
                escape_html(&o.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    let marks: String = layout
        .slider
        .marks
        .iter()
        .map(|m| {
            format!(
                "<option value=\"{}\" label=\"{}\"></option>",
                format_number(m.value),
                escape_html(&m.label)
            )
        })
        .collect::<Vec<_>>()
        .join("");

    let mark_labels: String = layout
        .slider
        .marks
        .iter()
        .map(|m| format!("<span>{}</span>", escape_html(&m.label)))
        .collect::<Vec<_>>()
        .join("");

    // Outputs driven by the slider sit below it, the rest below the dropdown
    let (below_slider, below_dropdown): (Vec<OutputId>, Vec<OutputId>) =
        layout.outputs.iter().partition(|id| {
            CALLBACKS
                .iter()
                .any(|cb| cb.output == **id && cb.inputs.contains(&layout.slider.id))
        });

    PAGE_TEMPLATE
        .replace("%%TITLE%%", &escape_html(&layout.title))
        .replace("%%DROPDOWN_ID%%", layout.dropdown.id.as_str())
        .replace("%%PLACEHOLDER%%", &escape_html(&layout.dropdown.placeholder))
        .replace("%%SITE_OPTIONS%%", &options)
        .replace("%%SLIDER_ID%%", layout.slider.id.as_str())
        .replace("%%SLIDER_MIN%%", &format_number(layout.slider.min))
        .replace("%%SLIDER_MAX%%", &format_number(layout.slider.max))
        .replace("%%SLIDER_STEP%%", &format_number(layout.slider.step))
        .replace("%%LOW%%", &format_number(layout.slider.value.low))
        .replace("%%HIGH%%", &format_number(layout.slider.value.high))
        .replace("%%MARKS%%", &marks)
        .replace("%%MARK_LABELS%%", &mark_labels)
        .replace("%%SITE_OUTPUTS%%", &output_regions(&below_dropdown))
        .replace("%%RANGE_OUTPUTS%%", &output_regions(&below_slider))
}

fn output_regions(ids: &[OutputId]) -> String {
    ids.iter()
        .map(|id| format!("<div id=\"{}\" class=\"chart\"></div>", id))
        .collect::<Vec<_>>()
        .join("\n    <br>\n    ")
}

/// Escape text for HTML element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>%%TITLE%%</title>
    <script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
    <style>
        * { box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 20px;
        }
        h1 { text-align: center; color: #503D36; font-size: 40px; }
        select {
            width: 100%;
            padding: 8px;
            border: 1px solid #ddd;
            border-radius: 4px;
            font-size: 14px;
        }
        .range { position: relative; height: 28px; }
        .range input[type=range] {
            position: absolute;
            left: 0;
            width: 100%;
            pointer-events: none;
            background: none;
            -webkit-appearance: none;
            appearance: none;
        }
        .range input[type=range]::-webkit-slider-thumb { pointer-events: auto; }
        .range input[type=range]::-moz-range-thumb { pointer-events: auto; }
        .marks { display: flex; justify-content: space-between; color: #666; font-size: 12px; }
        .status { color: #666; font-size: 14px; }
        .chart { min-height: 450px; }
    </style>
</head>
<body>
    <h1>%%TITLE%%</h1>

    <select id="%%DROPDOWN_ID%%" title="%%PLACEHOLDER%%">
                %%SITE_OPTIONS%%
    </select>
    <br>

    %%SITE_OUTPUTS%%
    <br>

    <p>Payload range (Kg): <span class="status" id="payload-value">[%%LOW%%, %%HIGH%%]</span></p>
    <div id="%%SLIDER_ID%%">
        <div class="range">
            <input type="range" id="payload-low" min="%%SLIDER_MIN%%" max="%%SLIDER_MAX%%" step="%%SLIDER_STEP%%" value="%%LOW%%" list="payload-marks">
            <input type="range" id="payload-high" min="%%SLIDER_MIN%%" max="%%SLIDER_MAX%%" step="%%SLIDER_STEP%%" value="%%HIGH%%" list="payload-marks">
        </div>
        <div class="marks">%%MARK_LABELS%%</div>
        <datalist id="payload-marks">%%MARKS%%</datalist>
    </div>

    %%RANGE_OUTPUTS%%
    <div class="status" id="status">Connecting...</div>

    <script>
        const statusLine = document.getElementById('status');
        const dropdown = document.getElementById('%%DROPDOWN_ID%%');
        const lowInput = document.getElementById('payload-low');
        const highInput = document.getElementById('payload-high');
        const rangeText = document.getElementById('payload-value');

        const scheme = location.protocol === 'https:' ? 'wss://' : 'ws://';
        const ws = new WebSocket(scheme + location.host + '/ws');

        ws.onopen = () => { statusLine.textContent = ''; };
        ws.onclose = () => { statusLine.textContent = 'Disconnected - reload to reconnect'; };

        ws.onmessage = (event) => {
            const msg = JSON.parse(event.data);
            if (msg.type === 'update') {
                msg.outputs.forEach(o => Plotly.react(o.id, o.figure.data, o.figure.layout));
            } else if (msg.type === 'error') {
                console.warn('Dashboard error:', msg.message);
                statusLine.textContent = msg.message;
            }
        };

        function send(id, value) {
            if (ws.readyState === WebSocket.OPEN) {
                ws.send(JSON.stringify({ type: 'input', id: id, value: value }));
            }
        }

        dropdown.addEventListener('change', () => send('%%DROPDOWN_ID%%', dropdown.value));

        // Bounds as last sent. The inputs may hold step-snapped values, so
        // only the moved handle is read back.
        let low = %%LOW%%, high = %%HIGH%%;

        // Handles never cross: the moved handle stops at the other one
        function onRangeChange(moved) {
            if (moved === lowInput) {
                low = Math.min(Number(lowInput.value), high);
                lowInput.value = low;
            } else {
                high = Math.max(Number(highInput.value), low);
                highInput.value = high;
            }
            rangeText.textContent = '[' + low + ', ' + high + ']';
            send('%%SLIDER_ID%%', [low, high]);
        }

        lowInput.addEventListener('change', () => onRangeChange(lowInput));
        highInput.addEventListener('change', () => onRangeChange(highInput));
    </script>
</body>
</html>
"##;
