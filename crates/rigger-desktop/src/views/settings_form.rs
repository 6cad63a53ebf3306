//! Settings form view
//!
//! Owns the shared form state and the update channel the sections report
//! into.

use dioxus::prelude::*;

use rigger_core::{FieldUpdate, FormState, NoSqlDatabase, SelectChoice};

use crate::components::NoSqlSettingsSection;
use crate::state::AppState;
use crate::theme::ResolvedTheme;

/// NoSQL engines offered by the console
const NOSQL_ENGINES: &[(&str, &str)] = &[("DynamoDB", "Amazon DynamoDB")];

/// App settings form page
#[component]
pub fn SettingsForm() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let form = (state.form)();
    let locked = (state.locked)();
    let dark = (state.theme)().is_dark();

    let engines: Vec<SelectChoice> = NOSQL_ENGINES
        .iter()
        .map(|(value, label)| SelectChoice::new(*value, *label))
        .collect();

    // Live preview of what the parent form would submit
    let preview = NoSqlDatabase::from_form(&form)
        .and_then(|database| serde_json::to_string_pretty(&database).ok());

    rsx! {
        div {
            class: "settings-form",
            style: "max-width: 640px; margin: 0 auto; padding: 24px; display: flex; flex-direction: column; gap: 16px;",

            div {
                class: "settings-form-toolbar",
                style: "display: flex; justify-content: flex-end; gap: 8px;",

                button {
                    disabled: locked,
                    onclick: move |_| {
                        let mut seeded = FormState::new();
                        NoSqlDatabase {
                            engine: "DynamoDB".to_string(),
                            primary_key: "tenant_id".to_string(),
                        }
                        .seed_form(&mut seeded);
                        state.form.set(seeded);
                    },
                    "Load sample"
                }
                button {
                    onclick: move |_| {
                        let next = if (state.theme)().is_dark() {
                            ResolvedTheme::Light
                        } else {
                            ResolvedTheme::Dark
                        };
                        state.theme.set(next);
                    },
                    if dark { "Light theme" } else { "Dark theme" }
                }
                button {
                    onclick: move |_| {
                        let locked_now = (state.locked)();
                        state.locked.set(!locked_now);
                    },
                    if locked { "Unlock" } else { "Lock" }
                }
            }

            NoSqlSettingsSection {
                card_border: colors.border,
                header_bg: colors.bg_secondary,
                state: form,
                locked: locked,
                engines: engines,
                on_update: move |update: FieldUpdate| state.apply_update(update),
            }

            if let Some(preview) = preview {
                pre {
                    class: "settings-preview",
                    style: "background: {colors.bg_tertiary}; border: 1px solid {colors.border}; padding: 12px; border-radius: 6px; font-size: 12px; white-space: pre-wrap;",
                    "{preview}"
                }
            } else {
                div {
                    class: "settings-hint",
                    style: "color: {colors.text_muted}; font-size: 12px;",
                    "No SQL database provisioning is disabled."
                }
            }
        }
    }
}
