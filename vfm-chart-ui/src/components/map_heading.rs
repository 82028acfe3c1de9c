//! Dynamic heading above each map.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapHeadingProps {
    /// Already-uppercased display title of the active selection
    pub title: String,
}

/// Centered heading showing which column a map is currently displaying.
#[component]
pub fn MapHeading(props: MapHeadingProps) -> Element {
    rsx! {
        h2 {
            style: "text-align: center; letter-spacing: 1px; margin: 24px 0 8px 0;",
            "{props.title}"
        }
    }
}
