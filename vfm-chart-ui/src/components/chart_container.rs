//! Container div the GeoChart renderer draws into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the map container (the JS bridge renders into this)
    pub id: String,
    /// Minimum height in pixels, reserved before the chart draws
    #[props(default = 425)]
    pub min_height: u32,
}

/// A container div for one choropleth map.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "width: 100%; min-height: {props.min_height}px;",
        }
    }
}
