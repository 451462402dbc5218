//! Shared Dioxus components and JS interop for the well dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js chart and maplibre map
//!   functions via `js_sys::eval()`, plus JS-to-Rust callback installation
//! - `fetch`: async static-file fetch and combined dataset loading
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (picker, cards, lithology column)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
