//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a well-load error in a styled box. Only the failed well's panel
/// is affected; the map stays interactive.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: rgba(198, 40, 40, 0.15); color: #EF9A9A; border-radius: 8px; border: 1px solid #C62828;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
