//! Well summary card: display name and location.

use dioxus::prelude::*;
use gwd_data::format::format_dms;
use gwd_well::lithology::WellCoordinates;

#[derive(Props, Clone, PartialEq)]
pub struct WellSummaryProps {
    pub title: String,
    pub coordinates: WellCoordinates,
}

/// Header card showing the selected well's name and its coordinates in
/// degrees-minutes-seconds.
#[component]
pub fn WellSummary(props: WellSummaryProps) -> Element {
    let location = format_dms(&props.coordinates);
    rsx! {
        div {
            style: "padding: 12px 16px; border-radius: 12px; background: rgba(0, 0, 0, 0.6); border: 1px solid rgba(255, 255, 255, 0.2); color: white;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px; font-weight: bold;",
                "{props.title}"
            }
            p {
                style: "margin: 0; font-size: 13px; color: #ccc;",
                "{location}"
            }
        }
    }
}
