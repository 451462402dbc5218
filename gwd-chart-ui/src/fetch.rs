//! Async fetch of the per-well static data files.
//!
//! The dashboard is purely a client of static assets under [`DATA_BASE_PATH`];
//! there is no API to talk to. Fetches have no timeout and are never retried:
//! a failed load surfaces as an error card for that well and the user can
//! select it again.

use anyhow::{anyhow, bail, Context};
use gwd_well::dataset::CombinedWellDataset;
use gwd_well::lithology;
use gwd_well::series::SeriesKind;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Base path the static well data files are served from.
pub const DATA_BASE_PATH: &str = "/data";

fn js_error(context: &str, value: JsValue) -> anyhow::Error {
    anyhow!("{context}: {value:?}")
}

/// Fetch a static text resource. Fails on network errors and non-OK HTTP
/// statuses.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    log::debug!("fetching {url}");
    let window = web_sys::window().context("no window object")?;
    let response_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error("fetch failed", e))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|e| js_error("fetch returned a non-Response value", e))?;
    if !response.ok() {
        bail!("failed to fetch {url}: HTTP {}", response.status());
    }
    let body_promise = response
        .text()
        .map_err(|e| js_error("response body unavailable", e))?;
    let body_value = JsFuture::from(body_promise)
        .await
        .map_err(|e| js_error("reading response body failed", e))?;
    body_value
        .as_string()
        .with_context(|| format!("response body for {url} was not text"))
}

/// Fetch and assemble the combined dataset for a well.
///
/// The first failing resource fails the whole load and the remaining
/// fetches never start. Callers tag each load with the requested well id
/// and discard results that resolve after a different well was selected;
/// in-flight loads are not cancelled.
pub async fn load_combined_dataset(well_id: &str) -> anyhow::Result<CombinedWellDataset> {
    let water_csv = fetch_text(&data_url(&SeriesKind::WaterLevel.file_name(well_id))).await?;
    let rain_csv = fetch_text(&data_url(&SeriesKind::RainLevel.file_name(well_id))).await?;
    let lithology_json = fetch_text(&data_url(&lithology::file_name(well_id))).await?;

    CombinedWellDataset::assemble(well_id, &water_csv, &rain_csv, &lithology_json)
}

fn data_url(file_name: &str) -> String {
    format!("{DATA_BASE_PATH}/{file_name}")
}
