//! Selection state machine for the two maps.
//!
//! The page holds exactly one active demographic column and one active
//! fairness column at a time. Rather than scattering that across UI
//! handlers, the state is a single immutable record replaced by a
//! reducer-style transition, so the whole machine is testable with no
//! rendering in sight.
//!
//! Transitions:
//! - `Uninitialized` -> `LoadCompleted` -> `Ready` with both defaults
//! - `Ready` -> `DemographicSelected` -> `Ready`, fairness side untouched
//! - `Ready` -> `FairnessSelected` -> `Ready`, demographic side untouched
//! - `Ready` -> `LoadCompleted` -> `Ready` reset to defaults over new rows
//!
//! Charts are only drawn once the machine reaches `Ready`; selection events
//! arriving before the load are no-ops.

use crate::catalog::{DEFAULT_DEMOGRAPHIC, DEFAULT_FAIRNESS};
use crate::chart_table::{chart_table, ChartTable, ColorRange};
use crate::rows::RowSet;

/// A discrete event the page can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    /// The CSV finished loading and parsing.
    LoadCompleted(RowSet),
    /// A demographic toggle was activated.
    DemographicSelected { column: String, title: String },
    /// A fairness toggle was activated, carrying its fixed gradient range.
    FairnessSelected {
        column: String,
        title: String,
        range: ColorRange,
    },
}

/// One map's active selection: the chosen column, its display title and the
/// derived chart table.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSelection {
    pub column: String,
    pub title: String,
    pub table: ChartTable,
}

impl MapSelection {
    fn new(rows: &RowSet, column: &str, title: &str) -> Self {
        Self {
            column: column.to_string(),
            title: title.to_string(),
            table: chart_table(rows, column),
        }
    }

    /// Uppercased title as shown in the map headings.
    pub fn display_title(&self) -> String {
        self.title.to_uppercase()
    }
}

/// Everything the page needs once data has loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadySelection {
    rows: RowSet,
    pub demographic: MapSelection,
    pub fairness: MapSelection,
    pub fairness_range: ColorRange,
}

/// The whole-page state. Starts `Uninitialized`; a successful load moves it
/// to `Ready` and it never leaves.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    Uninitialized,
    Ready(ReadySelection),
}

impl SelectionState {
    /// Apply one event, producing the next state. Pure: same inputs, same
    /// output, no mutation of the consumed state.
    pub fn apply(self, event: SelectionEvent) -> SelectionState {
        match (self, event) {
            (_, SelectionEvent::LoadCompleted(rows)) => {
                let demographic = MapSelection::new(
                    &rows,
                    DEFAULT_DEMOGRAPHIC.column,
                    DEFAULT_DEMOGRAPHIC.title,
                );
                let fairness =
                    MapSelection::new(&rows, DEFAULT_FAIRNESS.column, DEFAULT_FAIRNESS.title);
                SelectionState::Ready(ReadySelection {
                    rows,
                    demographic,
                    fairness,
                    fairness_range: DEFAULT_FAIRNESS.range,
                })
            }
            (
                SelectionState::Ready(ready),
                SelectionEvent::DemographicSelected { column, title },
            ) => SelectionState::Ready(ReadySelection {
                demographic: MapSelection::new(&ready.rows, &column, &title),
                ..ready
            }),
            (
                SelectionState::Ready(ready),
                SelectionEvent::FairnessSelected {
                    column,
                    title,
                    range,
                },
            ) => SelectionState::Ready(ReadySelection {
                fairness: MapSelection::new(&ready.rows, &column, &title),
                fairness_range: range,
                ..ready
            }),
            // Toggles before the load completes have nothing to transform.
            (state @ SelectionState::Uninitialized, _) => state,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SelectionState::Ready(_))
    }

    pub fn ready(&self) -> Option<&ReadySelection> {
        match self {
            SelectionState::Ready(ready) => Some(ready),
            SelectionState::Uninitialized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::rows::Row;

    fn sample_rows() -> RowSet {
        RowSet::from_rows(vec![
            Row::from_pairs([
                ("State", "Alabama"),
                ("Percent of Population that Registered to Vote", "69.1"),
                ("Percentage of Population that Voted", "63.1"),
                ("Overall Voter Fairness Score (out of 34.5)", "10.25"),
                ("Independence & Integrity Score (out of 6)", "2"),
            ]),
            Row::from_pairs([
                ("State", "Alaska"),
                ("Percent of Population that Registered to Vote", "73.4"),
                ("Percentage of Population that Voted", "Unknown"),
                ("Overall Voter Fairness Score (out of 34.5)", "15.5"),
                ("Independence & Integrity Score (out of 6)", "3.5"),
            ]),
        ])
    }

    fn ready_state() -> SelectionState {
        SelectionState::Uninitialized.apply(SelectionEvent::LoadCompleted(sample_rows()))
    }

    #[test]
    fn load_moves_to_ready_with_defaults() {
        let state = ready_state();
        let ready = state.ready().expect("should be ready after load");
        assert_eq!(ready.demographic.display_title(), "VOTER REGISTRATION");
        assert_eq!(
            ready.fairness.display_title(),
            "OVERALL VOTER FAIRNESS SCORE"
        );
        assert_eq!(ready.fairness_range, ColorRange::new(0.0, 34.5));
        assert_eq!(ready.demographic.table.entries.len(), 2);
    }

    #[test]
    fn toggles_before_load_are_noops() {
        let state = SelectionState::Uninitialized.apply(SelectionEvent::DemographicSelected {
            column: "Percentage of Population that Voted".to_string(),
            title: "Voter Turnout".to_string(),
        });
        assert_eq!(state, SelectionState::Uninitialized);
        assert!(!state.is_ready());
    }

    #[test]
    fn demographic_toggle_leaves_fairness_untouched() {
        let state = ready_state().apply(SelectionEvent::DemographicSelected {
            column: catalog::VOTER_TURNOUT.column.to_string(),
            title: catalog::VOTER_TURNOUT.title.to_string(),
        });
        let ready = state.ready().unwrap();
        assert_eq!(ready.demographic.title, "Voter Turnout");
        // Alaska's turnout cell is Unknown, so only Alabama remains
        assert_eq!(ready.demographic.table.entries.len(), 1);
        assert_eq!(ready.fairness.title, "Overall Voter Fairness Score");
        assert_eq!(ready.fairness_range, ColorRange::new(0.0, 34.5));
    }

    #[test]
    fn fairness_toggle_replaces_range_independent_of_data() {
        let cat = catalog::INDEPENDENCE_INTEGRITY;
        let state = ready_state().apply(SelectionEvent::FairnessSelected {
            column: cat.column.to_string(),
            title: cat.title.to_string(),
            range: cat.range,
        });
        let ready = state.ready().unwrap();
        assert_eq!(ready.fairness_range, ColorRange::new(-1.0, 6.0));
        assert_eq!(ready.fairness.table.entries.len(), 2);
        // Demographic side unchanged
        assert_eq!(ready.demographic.title, "Voter Registration");
    }

    #[test]
    fn reload_resets_both_selections_to_defaults() {
        let state = ready_state().apply(SelectionEvent::DemographicSelected {
            column: catalog::VOTER_TURNOUT.column.to_string(),
            title: catalog::VOTER_TURNOUT.title.to_string(),
        });
        let reloaded = state.apply(SelectionEvent::LoadCompleted(sample_rows()));
        let ready = reloaded.ready().unwrap();
        assert_eq!(ready.demographic.title, "Voter Registration");
        assert_eq!(ready.fairness.title, "Overall Voter Fairness Score");
    }

    #[test]
    fn load_with_empty_rows_yields_header_only_tables() {
        let state = SelectionState::Uninitialized
            .apply(SelectionEvent::LoadCompleted(RowSet::from_rows(Vec::new())));
        let ready = state.ready().unwrap();
        assert_eq!(ready.demographic.table.len(), 1);
        assert_eq!(ready.fairness.table.len(), 1);
    }
}
