//! Reusable Dioxus RSX components for the voter fairness map app.

mod chart_container;
mod demographic_toggles;
mod error_display;
mod fairness_toggles;
mod loading_spinner;
mod map_heading;

pub use chart_container::ChartContainer;
pub use demographic_toggles::DemographicToggles;
pub use error_display::ErrorDisplay;
pub use fairness_toggles::FairnessToggles;
pub use loading_spinner::LoadingSpinner;
pub use map_heading::MapHeading;
