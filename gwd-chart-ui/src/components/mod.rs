//! Reusable Dioxus RSX components for the well dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod lithology_column;
mod loading_spinner;
mod time_span_picker;
mod well_summary;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use lithology_column::LithologyColumn;
pub use loading_spinner::LoadingSpinner;
pub use time_span_picker::TimeSpanPicker;
pub use well_summary::WellSummary;
