//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use rigger_core::{FieldUpdate, FormState};

use crate::theme::ResolvedTheme;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Shared settings form state, owned here and read by the sections
    pub form: Signal<FormState>,
    /// Read-only mode for the whole form
    pub locked: Signal<bool>,
    /// Active color theme
    pub theme: Signal<ResolvedTheme>,
}

impl AppState {
    /// Apply a field update dispatched by a form component.
    pub fn apply_update(&mut self, update: FieldUpdate) {
        tracing::debug!("Field update: {} = {:?}", update.path, update.value);
        self.form.write().apply(update);
    }
}
