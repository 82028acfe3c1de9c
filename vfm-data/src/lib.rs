//! Data engine for the voter fairness map app.
//!
//! This crate holds everything that does not touch the DOM:
//! - `rows`: CSV parsing into an immutable per-state row snapshot
//! - `chart_table`: the column transform producing choropleth-ready tables
//! - `catalog`: the static table of selectable columns, titles and ranges
//! - `selection`: the pure state machine driving both maps
//!
//! The UI crates consume typed values from here and serialize them to JSON
//! at the JS chart boundary.

pub mod catalog;
pub mod chart_table;
pub mod rows;
pub mod selection;
