//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions and the maplibre map setup live in
//! `assets/js/*.js` and are embedded at compile time. They are evaluated as
//! globals (no ES modules) and exposed via `window.*`. This module provides
//! safe Rust wrappers that serialize data and call those globals, plus the
//! reverse direction: installing Rust closures as `window.*` functions the
//! chart/map JS invokes on pointer events.

use gwd_data::format::timestamp_label;
use gwd_data::time_span::TimeSpan;
use gwd_well::sample::WellSample;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

// Embed the chart and map JS files at compile time
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static WELL_MAP_JS: &str = include_str!("../assets/js/well-map.js");

/// One point as the chart JS consumes it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPoint {
    pub timestamp: String,
    pub value: f64,
    pub label: String,
}

/// Project a filtered series into chart points, with x-axis labels chosen
/// for the active span.
pub fn chart_points(samples: &[WellSample], span: TimeSpan) -> Vec<ChartPoint> {
    samples
        .iter()
        .map(|sample| ChartPoint {
            timestamp: sample.timestamp.to_rfc3339(),
            value: sample.value,
            label: timestamp_label(sample.timestamp, span),
        })
        .collect()
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('GWD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart and map scripts with a wait-for-library polling loop.
///
/// The JS files define functions via `function` declarations. To ensure
/// they become globally accessible (not block-scoped inside the setInterval
/// callback), they are evaluated at global scope via indirect `eval()` once
/// D3 and maplibre are ready, and each function is explicitly promoted to
/// `window.*`.
pub fn init_scripts() {
    let all_js = [LINE_CHART_JS, BAR_CHART_JS, WELL_MAP_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__gwdScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof maplibregl !== 'undefined') {
                    clearInterval(waitForLibs);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__gwdScripts);
                    delete window.__gwdScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof showChartTip !== 'undefined') window.showChartTip = showChartTip;
                    if (typeof hideChartTip !== 'undefined') window.hideChartTip = hideChartTip;
                    if (typeof destroyChart !== 'undefined') window.destroyChart = destroyChart;
                    if (typeof initWellMap !== 'undefined') window.initWellMap = initWellMap;
                    window.__gwdScriptsReady = true;
                    console.log('GWD chart scripts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Install a `window.<name>` function backed by a Rust closure.
///
/// Used for the JS-to-Rust event path: marker clicks and chart hover/leave.
/// The closure is intentionally leaked; install once at app startup.
pub fn install_global_callback(name: &str, callback: Closure<dyn FnMut(JsValue)>) {
    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(window.as_ref(), &JsValue::from_str(name), callback.as_ref());
    }
    callback.forget();
}

/// Render the water level line chart.
///
/// Uses a polling loop to wait for the libraries, script init, and the
/// container DOM element before rendering.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderLineChart", container_id, data_json, config_json);
}

/// Render the rainfall bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Initialize the satellite well-selection map with its markers.
pub fn init_well_map(container_id: &str, wells_json: &str, config_json: &str) {
    render_when_ready("initWellMap", container_id, wells_json, config_json);
}

fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__gwdScriptsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[GWD] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Move a chart's tooltip/axis-pointer to the given local index.
pub fn show_chart_tip(container_id: &str, index: usize) {
    call_js(&format!(
        "if (window.showChartTip) window.showChartTip('{container_id}', {index});"
    ));
}

/// Hide a chart's tooltip/axis-pointer.
pub fn hide_chart_tip(container_id: &str) {
    call_js(&format!(
        "if (window.hideChartTip) window.hideChartTip('{container_id}');"
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyChart) window.destroyChart('{container_id}'); else {{ var el = document.getElementById('{container_id}'); if (el) el.innerHTML = ''; }}"
    ));
}
