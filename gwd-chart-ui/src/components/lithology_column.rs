//! Vertical lithology column with the current water level fill.
//!
//! Mirrors a drilling log: the classified layer strips flank a central
//! water column filled from the bottom up to the water table. The fill
//! follows the hovered water-level sample, so sweeping across the line
//! chart animates the column.

use dioxus::prelude::*;
use gwd_well::lithology::LithologyLayer;

#[derive(Props, Clone, PartialEq)]
pub struct LithologyColumnProps {
    pub layers: Vec<LithologyLayer>,
    /// Depth to water in feet below ground.
    pub water_level: f64,
    /// Bottom depth of the deepest layer.
    pub max_depth: f64,
}

#[component]
pub fn LithologyColumn(props: LithologyColumnProps) -> Element {
    if props.layers.is_empty() || props.max_depth <= 0.0 {
        return rsx! {
            div {
                style: "display: flex; align-items: center; justify-content: center; height: 615px; width: 120px; color: #888;",
                "No lithology data"
            }
        };
    }

    // water_level is depth below ground, so the filled fraction is what
    // remains below the water table.
    let fill_percent =
        ((props.max_depth - props.water_level) / props.max_depth * 100.0).clamp(0.0, 100.0);

    rsx! {
        div {
            style: "display: flex; align-items: stretch; justify-content: center; height: 615px; width: 120px;",
            LayerStrip { layers: props.layers.clone(), max_depth: props.max_depth }
            div {
                style: "display: flex; flex-direction: column-reverse; width: 64px; overflow: hidden;",
                div {
                    style: "height: {fill_percent}%; background: linear-gradient(to top, #1366C0, #5E9BDC);",
                }
            }
            LayerStrip { layers: props.layers, max_depth: props.max_depth }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct LayerStripProps {
    layers: Vec<LithologyLayer>,
    max_depth: f64,
}

/// One side strip of the column, each layer sized by its share of the
/// total depth.
#[component]
fn LayerStrip(props: LayerStripProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; width: 16px;",
            for layer in props.layers.iter() {
                div {
                    style: format!(
                        "flex-grow: {}; background: {};",
                        layer.thickness() / props.max_depth,
                        layer.class.color()
                    ),
                    title: layer.class.label(),
                }
            }
        }
    }
}
