//! Toggle buttons driving the demographic (top) map.

use crate::state::AppState;
use dioxus::prelude::*;
use vfm_data::catalog::{self, DemographicCategory};
use vfm_data::selection::SelectionEvent;

/// One row of demographic toggle buttons.
#[component]
fn ToggleRow(group: Vec<DemographicCategory>) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 8px; margin: 6px 0;",
            for cat in group {
                button {
                    onclick: move |_| {
                        state.dispatch(SelectionEvent::DemographicSelected {
                            column: cat.column.to_string(),
                            title: cat.title.to_string(),
                        });
                    },
                    "{cat.title}"
                }
            }
        }
    }
}

/// All demographic toggle rows, grouped as in the catalog.
/// Clicks dispatch `DemographicSelected`; the fairness map is unaffected.
#[component]
pub fn DemographicToggles() -> Element {
    rsx! {
        div {
            for group in catalog::DEMOGRAPHIC_GROUPS {
                ToggleRow { group: group.to_vec() }
            }
        }
    }
}
