//! Button row for choosing the trailing time span.

use crate::state::AppState;
use dioxus::prelude::*;
use gwd_data::time_span::TimeSpan;

const ACTIVE_STYLE: &str = "width: 30px; height: 28px; font-size: 13px; font-weight: 600; border: none; border-radius: 4px; cursor: pointer; background: #585858; color: white;";
const INACTIVE_STYLE: &str = "width: 30px; height: 28px; font-size: 13px; font-weight: 600; border: none; border-radius: 4px; cursor: pointer; background: transparent; color: white;";

/// Time span picker row. Writes the chosen span into `AppState::time_span`;
/// the charts refilter and rerender from the signal change.
#[component]
pub fn TimeSpanPicker() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.time_span)();

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; gap: 8px; padding-bottom: 8px; border-bottom: 1px solid #454545;",
            for span in TimeSpan::PICKER {
                button {
                    style: if span == active { ACTIVE_STYLE } else { INACTIVE_STYLE },
                    onclick: move |_| state.time_span.set(span),
                    {span.label()}
                }
            }
        }
    }
}
