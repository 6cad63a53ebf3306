//! NoSQL database settings section

use dioxus::prelude::*;

use rigger_core::{FieldUpdate, FormState, NoSqlDatabase, SelectChoice};

use super::field_group::ConditionalFieldGroup;

/// Card for the optional NoSQL database settings.
///
/// The body is a single conditional group built from the NoSQL field
/// layout; an empty `engines` list renders the variant without an engine
/// selector.
#[component]
pub fn NoSqlSettingsSection(
    card_border: &'static str,
    header_bg: &'static str,
    state: FormState,
    locked: bool,
    engines: Vec<SelectChoice>,
    on_update: EventHandler<FieldUpdate>,
) -> Element {
    let group = NoSqlDatabase::field_group(&engines);

    rsx! {
        section {
            class: "settings-card",
            style: "border: 1px solid {card_border}; border-radius: 8px; overflow: hidden;",

            div {
                class: "settings-card-header",
                style: "padding: 10px 16px; background: {header_bg}; border-bottom: 1px solid {card_border}; font-weight: 600;",
                "No SQL Database"
            }
            div {
                class: "settings-card-body",
                style: "padding: 16px;",

                ConditionalFieldGroup {
                    group: group,
                    state: state,
                    locked: locked,
                    on_update: on_update,
                }
            }
        }
    }
}
