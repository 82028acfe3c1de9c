//! Shared Dioxus components and Google GeoChart bridge for the voter
//! fairness map app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the choropleth renderer via `js_sys::eval()`
//! - `geo_options`: serializable GeoChart configuration
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (toggles, headings, containers)

pub mod components;
pub mod geo_options;
pub mod js_bridge;
pub mod state;
