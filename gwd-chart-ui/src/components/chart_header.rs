//! Chart card header: title plus the hovered-sample readout line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title, e.g. "Water Level (ft)"
    pub title: String,
    /// Hovered timestamp readout; falls back to a hint when nothing is hovered
    #[props(default = None)]
    pub hovered: Option<String>,
}

/// Header for a chart card. The readout line mirrors the tooltip position
/// on every synchronized chart, so it lives up here rather than inside the
/// plot area.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let readout = props
        .hovered
        .unwrap_or_else(|| "Hover over the chart".to_string());
    rsx! {
        div {
            style: "margin-bottom: 4px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px; font-weight: bold; color: white;",
                "{props.title}"
            }
            div {
                style: "font-size: 13px; font-weight: 500; text-align: center; color: white;",
                "{readout}"
            }
        }
    }
}
