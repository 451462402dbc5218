//! Groundwater Well Monitoring Dashboard
//!
//! A satellite map for well selection, synchronized water level and
//! rainfall charts, and a lithology column diagram for the selected well.
//!
//! Data flow:
//! 1. A marker click on the map selects a well id.
//! 2. The three static files for that well are fetched and assembled into
//!    a `CombinedWellDataset`. Loads are tagged with the requested id and
//!    results resolving after the selection moved on are discarded.
//! 3. Both series are narrowed to the active time span and handed to the
//!    D3 bridge for rendering.
//! 4. Hovering either chart writes the reference-series (water level)
//!    index into the shared `HoverStore`; the other chart, the timestamp
//!    readout, and the lithology water fill follow it.

use dioxus::prelude::*;
use gwd_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LithologyColumn, LoadingSpinner, TimeSpanPicker,
    WellSummary,
};
use gwd_chart_ui::fetch;
use gwd_chart_ui::js_bridge;
use gwd_chart_ui::state::AppState;
use gwd_data::hover::{HoverStore, SyncGuard};
use gwd_data::nearest::translate_index;
use gwd_data::time_span::{filter_time_span, TimeSpan};
use gwd_data::{axis, format};
use gwd_well::sample::WellSample;
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

/// Chart and map container DOM element ids the JS bridge renders into.
const MAP_CONTAINER_ID: &str = "well-map";
const WATER_CHART_ID: &str = "water-level-chart";
const RAIN_CHART_ID: &str = "rain-level-chart";

/// Names of the `window.*` callbacks the chart and map JS invokes.
const WATER_HOVER_CB: &str = "__gwdWaterHover";
const RAIN_HOVER_CB: &str = "__gwdRainHover";
const CHART_LEAVE_CB: &str = "__gwdChartLeave";
const WELL_SELECT_CB: &str = "__gwdWellSelected";

/// Satellite style for the background map.
const MAP_STYLE_URL: &str =
    "https://api.maptiler.com/maps/hybrid/style.json?key=9NI99sjBP6UPRQHN9Mf7";

/// Monitored wells shown on the map: (id, latitude, longitude).
const WELLS: &[(&str, f64, f64)] = &[
    ("Escondido_5", 34.5399037605087, -120.453132886696),
    ("Oaks_5", 34.497165, -120.352712),
];

/// Floating panel card styling shared by the dashboard columns.
const CARD_STYLE: &str = "padding: 24px; border-radius: 12px; background: linear-gradient(to bottom right, rgba(0,0,0,0.7), rgba(0,0,0,0.5)); border: 1px solid rgba(255,255,255,0.2); backdrop-filter: blur(12px); color: white;";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("well-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let hover = use_hook(HoverStore::new);
    let water_guard = use_hook(SyncGuard::new);
    let rain_guard = use_hook(SyncGuard::new);

    // Filtered views of the active dataset under the selected span. The
    // charts and the hover translation both work on these, so a span or
    // dataset change swaps every consumer at once.
    let filtered_water = use_memo(move || {
        let span = (state.time_span)();
        state
            .dataset
            .read()
            .as_ref()
            .map(|d| filter_time_span(&d.water_level, span).to_vec())
            .unwrap_or_default()
    });
    let filtered_rain = use_memo(move || {
        let span = (state.time_span)();
        state
            .dataset
            .read()
            .as_ref()
            .map(|d| filter_time_span(&d.rain_level, span).to_vec())
            .unwrap_or_default()
    });

    // Install the JS-to-Rust callbacks, evaluate the chart scripts, and
    // bring up the map. Runs once: nothing reactive is read here.
    {
        let hover_water = hover.clone();
        let hover_rain = hover.clone();
        let hover_leave = hover.clone();
        let water_guard = water_guard.clone();
        let rain_guard = rain_guard.clone();
        use_effect(move || {
            js_bridge::init_scripts();

            // Water chart is the reference series: the local index IS the
            // shared index. Suppressed while an external update is applied.
            let hover = hover_water.clone();
            let guard = water_guard.clone();
            let on_water_hover = Closure::wrap(Box::new(move |value: JsValue| {
                if guard.is_applying() {
                    return;
                }
                let Some(idx) = value.as_f64().map(|v| v as usize) else {
                    return;
                };
                if idx < filtered_water.peek().len() {
                    hover.set(Some(idx));
                }
            }) as Box<dyn FnMut(JsValue)>);
            js_bridge::install_global_callback(WATER_HOVER_CB, on_water_hover);

            // Rain indices translate through the reference timestamps, as
            // the two series sample at different rates.
            let hover = hover_rain.clone();
            let guard = rain_guard.clone();
            let on_rain_hover = Closure::wrap(Box::new(move |value: JsValue| {
                if guard.is_applying() {
                    return;
                }
                let Some(idx) = value.as_f64().map(|v| v as usize) else {
                    return;
                };
                let water = filtered_water.peek();
                let rain = filtered_rain.peek();
                if let Some(reference_idx) = translate_index(&rain, &water, idx) {
                    hover.set(Some(reference_idx));
                }
            }) as Box<dyn FnMut(JsValue)>);
            js_bridge::install_global_callback(RAIN_HOVER_CB, on_rain_hover);

            let hover = hover_leave.clone();
            let on_leave = Closure::wrap(Box::new(move |_: JsValue| {
                hover.clear();
            }) as Box<dyn FnMut(JsValue)>);
            js_bridge::install_global_callback(CHART_LEAVE_CB, on_leave);

            let on_select = Closure::wrap(Box::new(move |value: JsValue| {
                let Some(id) = value.as_string() else { return };
                let mut selected = state.selected_well;
                if *selected.peek() != id {
                    log::info!("well selected: {id}");
                    selected.set(id);
                }
            }) as Box<dyn FnMut(JsValue)>);
            js_bridge::install_global_callback(WELL_SELECT_CB, on_select);

            init_map();
        });
    }

    // Load (and reload) the selected well's dataset.
    {
        let hover = hover.clone();
        use_effect(move || {
            let requested = (state.selected_well)();
            hover.clear();
            state.loading.set(true);
            state.error_msg.set(None);
            spawn(async move {
                let result = fetch::load_combined_dataset(&requested).await;
                // A result landing after the user moved on is dropped; the
                // newer selection's load owns the display.
                if *state.selected_well.peek() != requested {
                    log::info!("discarding stale load for {requested}");
                    return;
                }
                match result {
                    Ok(dataset) => {
                        // Seed the lithology fill with the latest sample
                        // until the user hovers.
                        state
                            .water_level
                            .set(dataset.water_level.last().map(|s| s.value).unwrap_or(0.0));
                        state.dataset.set(Some(dataset));
                    }
                    Err(e) => {
                        log::error!("failed to load well {requested}: {e:#}");
                        state
                            .error_msg
                            .set(Some(format!("Could not load data for {requested}: {e}")));
                    }
                }
                state.loading.set(false);
            });
        });
    }

    // Rerender both charts whenever the filtered series change. The hover
    // cell is cleared first: indices into the previous series are stale.
    {
        let hover = hover.clone();
        use_effect(move || {
            if (state.loading)() || state.error_msg.read().is_some() {
                return;
            }
            if state.dataset.read().is_none() {
                return;
            }
            let span = (state.time_span)();
            let water = filtered_water.read();
            let rain = filtered_rain.read();

            hover.clear();
            state.hovered_label.set(None);

            render_water_chart(&water, span);
            render_rain_chart(&rain, span);
        });
    }

    // Follow the shared hover cell: drive both tooltips, the timestamp
    // readout, and the lithology water fill. The subscription lives as
    // long as the app does.
    let _hover_subscription = {
        let hover = hover.clone();
        let water_guard = water_guard.clone();
        let rain_guard = rain_guard.clone();
        use_hook(move || {
            Rc::new(hover.subscribe(move |reference_idx| {
                let water = filtered_water.peek();
                let rain = filtered_rain.peek();

                // Reference chart displays at the shared index directly; the
                // guard swallows the echoed hover event.
                {
                    let _section = water_guard.apply_external();
                    match reference_idx.filter(|&idx| idx < water.len()) {
                        Some(idx) => js_bridge::show_chart_tip(WATER_CHART_ID, idx),
                        None => js_bridge::hide_chart_tip(WATER_CHART_ID),
                    }
                }
                // Rain chart translates to its own nearest sample; with no
                // rain samples on screen it suppresses the update entirely.
                {
                    let _section = rain_guard.apply_external();
                    match reference_idx.and_then(|idx| translate_index(&water, &rain, idx)) {
                        Some(idx) => js_bridge::show_chart_tip(RAIN_CHART_ID, idx),
                        None => js_bridge::hide_chart_tip(RAIN_CHART_ID),
                    }
                }

                let mut water_level = state.water_level;
                let mut hovered_label = state.hovered_label;
                match reference_idx.and_then(|idx| water.get(idx).copied()) {
                    Some(sample) => {
                        water_level.set(sample.value);
                        hovered_label.set(Some(format::hover_label(sample.timestamp)));
                    }
                    None => hovered_label.set(None),
                }
            }))
        })
    };

    rsx! {
        div {
            style: "position: relative; width: 100vw; height: 100vh; overflow: hidden; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            // Satellite map fills the background
            div {
                id: MAP_CONTAINER_ID,
                style: "position: absolute; top: 0; bottom: 0; left: 0; right: 0;",
            }

            // Panels float above the map on the right
            div {
                style: "position: absolute; top: 0; right: 0; display: flex; gap: 16px; padding: 16px; height: 100vh; box-sizing: border-box;",

                // Column 1: summary + lithology column
                div {
                    style: "display: flex; flex-direction: column; gap: 16px;",
                    if let Some(dataset) = (state.dataset)() {
                        WellSummary {
                            title: display_name(&dataset.well_id),
                            coordinates: dataset.coordinates,
                        }
                        div {
                            style: CARD_STYLE,
                            LithologyColumn {
                                layers: dataset.layers.clone(),
                                water_level: (state.water_level)(),
                                max_depth: dataset.max_depth(),
                            }
                        }
                    }
                }

                // Column 2: synchronized charts
                div {
                    style: "display: flex; flex-direction: column; gap: 16px; width: 378px;",
                    if let Some(err) = (state.error_msg)() {
                        ErrorDisplay { message: err }
                    } else if (state.loading)() {
                        div {
                            style: CARD_STYLE,
                            LoadingSpinner {}
                        }
                    } else {
                        div {
                            style: CARD_STYLE,
                            ChartHeader {
                                title: "Water Level (ft)".to_string(),
                                hovered: (state.hovered_label)(),
                            }
                            TimeSpanPicker {}
                            ChartContainer { id: WATER_CHART_ID.to_string(), min_height: 267 }
                        }
                        div {
                            style: CARD_STYLE,
                            ChartHeader {
                                title: "Rain Level (in)".to_string(),
                                hovered: (state.hovered_label)(),
                            }
                            ChartContainer { id: RAIN_CHART_ID.to_string(), min_height: 267 }
                        }
                    }
                }
            }
        }
    }
}

/// "Escondido_5" reads better as "Escondido Well 5" on the summary card.
fn display_name(well_id: &str) -> String {
    match well_id.rsplit_once('_') {
        Some((name, number)) => format!("{} Well {}", name.replace('_', " "), number),
        None => format!("{well_id} Well"),
    }
}

fn init_map() {
    let wells: Vec<_> = WELLS
        .iter()
        .map(|(id, latitude, longitude)| {
            json!({ "id": id, "latitude": latitude, "longitude": longitude })
        })
        .collect();
    let wells_json = serde_json::to_string(&wells).unwrap_or_default();
    let config_json = serde_json::to_string(&json!({
        "styleUrl": MAP_STYLE_URL,
        "zoom": 11,
        "flyToZoom": 13,
        "desktopOffsetX": 384,
        "selectCallback": WELL_SELECT_CB,
    }))
    .unwrap_or_default();
    js_bridge::init_well_map(MAP_CONTAINER_ID, &wells_json, &config_json);
}

fn render_water_chart(samples: &[WellSample], span: TimeSpan) {
    let points = js_bridge::chart_points(samples, span);
    let (y_min, y_max) = axis::padded_bounds(samples);
    let data_json = serde_json::to_string(&points).unwrap_or_default();
    let config_json = serde_json::to_string(&json!({
        "yMin": y_min,
        "yMax": y_max,
        "tickInterval": axis::tick_interval(y_min, y_max),
        "lineColor": "#91BDE5",
        "valueSuffix": " ft",
        "height": 267,
        "hoverCallback": WATER_HOVER_CB,
        "leaveCallback": CHART_LEAVE_CB,
    }))
    .unwrap_or_default();
    js_bridge::render_line_chart(WATER_CHART_ID, &data_json, &config_json);
}

fn render_rain_chart(samples: &[WellSample], span: TimeSpan) {
    let points = js_bridge::chart_points(samples, span);
    // Bars read from a zero baseline, so only the top is padded.
    let (_, y_max) = axis::padded_bounds(samples);
    let data_json = serde_json::to_string(&points).unwrap_or_default();
    let config_json = serde_json::to_string(&json!({
        "yMin": 0.0,
        "yMax": y_max,
        "barColor": "#5A99FF",
        "valueSuffix": " in",
        "height": 267,
        "hoverCallback": RAIN_HOVER_CB,
        "leaveCallback": CHART_LEAVE_CB,
    }))
    .unwrap_or_default();
    js_bridge::render_bar_chart(RAIN_CHART_ID, &data_json, &config_json);
}
