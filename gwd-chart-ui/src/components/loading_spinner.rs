//! Loading indicator component.

use dioxus::prelude::*;

/// Simple loading indicator shown while a well's dataset is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #ccc;",
            "Loading well data..."
        }
    }
}
