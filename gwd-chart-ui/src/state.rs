//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The cross-chart hover cell is deliberately NOT here: it is a
//! [`gwd_data::hover::HoverStore`] handed to each widget at construction.

use dioxus::prelude::*;
use gwd_data::time_span::TimeSpan;
use gwd_well::dataset::CombinedWellDataset;

/// Default well selected at startup.
pub const DEFAULT_WELL_ID: &str = "Escondido_5";

/// Shared application state for the well dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dataset for the selected well (None until the first load finishes)
    pub dataset: Signal<Option<CombinedWellDataset>>,
    /// Whether a dataset load is in flight
    pub loading: Signal<bool>,
    /// Error message if the selected well's data failed to load
    pub error_msg: Signal<Option<String>>,
    /// Currently selected well id
    pub selected_well: Signal<String>,
    /// Active trailing-window span for both chart widgets
    pub time_span: Signal<TimeSpan>,
    /// Depth-to-water (ft) at the hovered sample, drives the lithology fill
    pub water_level: Signal<f64>,
    /// Timestamp readout for the hovered sample, None when nothing is hovered
    pub hovered_label: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_well: Signal::new(DEFAULT_WELL_ID.to_string()),
            time_span: Signal::new(TimeSpan::OneDay),
            water_level: Signal::new(0.0),
            hovered_label: Signal::new(None),
        }
    }
}
