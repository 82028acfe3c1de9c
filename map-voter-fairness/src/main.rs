//! Voter patterns, visualized.
//!
//! A single-page app showing two US-state choropleths side by side: a
//! demographic map (registration/turnout percentages by group) and a voting
//! fairness map (MAP Democracy Ratings sub-scores). Toggle buttons switch
//! which column each map displays.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/voter-turnout.csv` into `OUT_DIR` and
//!    `include_str!` embeds it into the WASM binary.
//! 2. On mount: parse the CSV into a row snapshot and feed `LoadCompleted`
//!    through the selection reducer, which computes both default maps.
//! 3. On each toggle: the reducer recomputes one side; an effect re-renders
//!    both maps through the GeoChart bridge.

use dioxus::prelude::*;
use vfm_chart_ui::components::{
    ChartContainer, DemographicToggles, ErrorDisplay, FairnessToggles, LoadingSpinner, MapHeading,
};
use vfm_chart_ui::geo_options::GeoChartOptions;
use vfm_chart_ui::js_bridge;
use vfm_chart_ui::state::AppState;
use vfm_data::rows::RowSet;
use vfm_data::selection::SelectionEvent;

// Embed the voter turnout/fairness CSV at compile time (one row per state).
const VOTER_TURNOUT_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/voter-turnout.csv"));

/// DOM ids for the two map container divs.
const DEMOGRAPHIC_MAP_ID: &str = "demographic-map";
const FAIRNESS_MAP_ID: &str = "fairness-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("voter-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Parse CSV once on mount ───
    use_effect(move || {
        match RowSet::parse(VOTER_TURNOUT_CSV) {
            Ok(rows) if rows.is_empty() => {
                state.error_msg.set(Some("No voter data available.".to_string()));
            }
            Ok(rows) => {
                log::info!("[VFM Debug] app: loaded {} state rows", rows.len());
                state.dispatch(SelectionEvent::LoadCompleted(rows));
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Failed to parse voter data: {e}")));
            }
        }
        state.loading.set(false);

        // Initialize the GeoChart scripts (one-time)
        js_bridge::init_charts();
    });

    // ─── Effect 2: Re-render both maps whenever the selection changes ───
    use_effect(move || {
        let selection = (state.selection)();
        // Charts stay unrendered until the machine reaches Ready.
        let Some(ready) = selection.ready() else {
            return;
        };

        let demographic_data = ready.demographic.table.to_json().to_string();
        js_bridge::render_geo_chart(
            DEMOGRAPHIC_MAP_ID,
            &demographic_data,
            &GeoChartOptions::demographic().to_json(),
        );

        let fairness_data = ready.fairness.table.to_json().to_string();
        js_bridge::render_geo_chart(
            FAIRNESS_MAP_ID,
            &fairness_data,
            &GeoChartOptions::fairness(ready.fairness_range).to_json(),
        );
    });

    let selection = (state.selection)();

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            Banner {}

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            }

            DemographicToggles {}
            p {
                style: "font-size: 12px; color: #666; text-align: center;",
                "Note: States in gray did not have data available for them."
            }

            if let Some(ready) = selection.ready() {
                MapHeading { title: ready.demographic.display_title() }
                ChartContainer { id: DEMOGRAPHIC_MAP_ID.to_string() }
                ChartContainer { id: FAIRNESS_MAP_ID.to_string() }
                MapHeading { title: ready.fairness.display_title() }
            }

            FairnessToggles {}

            SourceNotes {}
            Footer {}
        }
    }
}

/// Intro banner explaining what the two maps show.
#[component]
fn Banner() -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h1 { "Voter patterns, visualized" }
            p {
                "For years, many states have been increasing their voter restrictions. \
                 While these states usually claim that these measures increase election \
                 security, many groups have pointed out that they disproportionately \
                 affect people of color."
            }
            p {
                "With the different toggles, you can more simply compare how voting \
                 restrictions affect different demographics. The top map lets you view \
                 certain demographics, while the bottom map lets you view certain voting \
                 fairness categories."
            }
            p {
                "By configuring the different toggles and comparing the two maps, you can \
                 reach conclusions about how certain voting policies impact the turnout of \
                 different demographics."
            }
        }
    }
}

/// Attribution for the two data sources.
#[component]
fn SourceNotes() -> Element {
    rsx! {
        p {
            style: "font-size: 13px; color: #444; margin-top: 24px;",
            "The demographic data is from the US Census Bureau's November 2020 "
            a {
                href: "https://www.census.gov/data/tables/time-series/demo/voting-and-registration/p20-585.html",
                target: "_blank",
                "election data"
            }
            " (tables 4a - 4c). The voting fairness data is from the Movement Advancement \
             Project (MAP)'s "
            a {
                href: "https://www.lgbtmap.org/democracy-maps/ratings_by_state",
                target: "_blank",
                "Democracy Ratings"
            }
            " - their website also provides more information about each of the voting \
             fairness categories and a profile of each state."
        }
    }
}

#[component]
fn Footer() -> Element {
    rsx! {
        div {
            style: "margin-top: 24px; padding-top: 8px; border-top: 1px solid #e0e0e0; font-size: 12px; color: #888;",
            p { "Built with Dioxus and Google GeoCharts." }
        }
    }
}
