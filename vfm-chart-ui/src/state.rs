//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and feed events through [`AppState::dispatch`],
//! which delegates to the pure reducer in `vfm_data::selection`.

use dioxus::prelude::*;
use vfm_data::selection::{SelectionEvent, SelectionState};

/// Shared application state for the voter fairness map app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The selection state machine (Uninitialized until the CSV parses)
    pub selection: Signal<SelectionState>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            selection: Signal::new(SelectionState::Uninitialized),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }

    /// Run one event through the reducer, replacing the selection state.
    ///
    /// Reads via `peek` so that dispatching from inside an effect does not
    /// subscribe that effect to the very signal it is writing.
    pub fn dispatch(&mut self, event: SelectionEvent) {
        let current = self.selection.peek().clone();
        self.selection.set(current.apply(event));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
