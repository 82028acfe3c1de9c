//! Toggle buttons driving the fairness (bottom) map.
//!
//! Each button carries its category's fixed color range, so activating it
//! rescales the gradient regardless of the underlying data values.

use crate::state::AppState;
use dioxus::prelude::*;
use vfm_data::catalog::{self, FairnessCategory};
use vfm_data::selection::SelectionEvent;

/// One row of fairness toggle buttons.
#[component]
fn ToggleRow(group: Vec<FairnessCategory>) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 8px; margin: 6px 0;",
            for cat in group {
                button {
                    onclick: move |_| {
                        state.dispatch(SelectionEvent::FairnessSelected {
                            column: cat.column.to_string(),
                            title: cat.title.to_string(),
                            range: cat.range,
                        });
                    },
                    "{cat.title}"
                }
            }
        }
    }
}

/// All fairness toggle rows, grouped as in the catalog.
#[component]
pub fn FairnessToggles() -> Element {
    rsx! {
        div {
            for group in catalog::FAIRNESS_GROUPS {
                ToggleRow { group: group.to_vec() }
            }
        }
    }
}
