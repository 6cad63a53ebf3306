//! Conditional field group component
//!
//! A checkbox-governed block of dependent form inputs. The component owns no
//! state of its own: it reads the parent's [`FormState`] and reports every
//! edit through `on_update`.

use dioxus::prelude::*;

use rigger_core::{ConditionalGroup, FieldKind, FieldRow, FieldUpdate, FormState, SelectChoice};

/// Checkbox toggle plus the dependent inputs it reveals.
///
/// Dependent inputs are hidden while the governing flag is false and
/// disabled (never hidden) in locked mode.
#[component]
pub fn ConditionalFieldGroup(
    group: ConditionalGroup,
    state: FormState,
    locked: bool,
    on_update: EventHandler<FieldUpdate>,
) -> Element {
    let expanded = group.is_expanded(&state);
    let rows = group.dependent_rows(&state, locked);
    let toggle = group.toggle(&state);
    let governing_id = element_id(&group.governing.path);

    rsx! {
        div {
            class: "field-group",

            div {
                class: "field-check",
                style: "display: flex; align-items: center; gap: 8px;",

                input {
                    id: "{governing_id}",
                    r#type: "checkbox",
                    checked: expanded,
                    disabled: locked,
                    onchange: move |_| on_update.call(toggle.clone()),
                }
                label {
                    r#for: "{governing_id}",
                    "{group.governing.label}"
                }
            }

            if expanded {
                div {
                    class: "field-group-body",
                    style: "display: flex; flex-direction: column; gap: 12px; margin-top: 12px;",

                    for row in rows {
                        DependentField {
                            key: "{row.descriptor.path}",
                            row: row.clone(),
                            on_update: on_update,
                        }
                    }
                }
            }
        }
    }
}

/// A single dependent input row.
#[component]
fn DependentField(row: FieldRow, on_update: EventHandler<FieldUpdate>) -> Element {
    let id = element_id(&row.descriptor.path);
    let current = row.value.as_text().to_string();
    let checked = row.value.as_bool();
    let select_path = row.descriptor.path.clone();
    let text_path = row.descriptor.path.clone();
    let check_path = row.descriptor.path.clone();

    rsx! {
        div {
            class: "field-block",

            if let FieldKind::Select { choices } = row.descriptor.kind.clone() {
                label {
                    r#for: "{id}",
                    style: "display: block; margin-bottom: 4px;",
                    "{row.descriptor.label}"
                }
                select {
                    id: "{id}",
                    disabled: row.disabled,
                    onchange: move |event: FormEvent| {
                        on_update.call(FieldUpdate::text(select_path.clone(), event.value()));
                    },

                    option {
                        value: "",
                        selected: placeholder_selected(&choices, &current),
                        "Please select"
                    }
                    for choice in choices {
                        option {
                            key: "{choice.value}",
                            value: "{choice.value}",
                            selected: choice.value == current,
                            "{choice.label}"
                        }
                    }
                }
            } else if matches!(row.descriptor.kind, FieldKind::Checkbox) {
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    input {
                        id: "{id}",
                        r#type: "checkbox",
                        checked: checked,
                        disabled: row.disabled,
                        onchange: move |_| {
                            on_update.call(FieldUpdate::flag(check_path.clone(), !checked));
                        },
                    }
                    label {
                        r#for: "{id}",
                        "{row.descriptor.label}"
                    }
                }
            } else {
                label {
                    r#for: "{id}",
                    style: "display: block; margin-bottom: 4px;",
                    "{row.descriptor.label}"
                }
                input {
                    id: "{id}",
                    r#type: "text",
                    value: "{current}",
                    disabled: row.disabled,
                    oninput: move |event: FormEvent| {
                        on_update.call(FieldUpdate::text(text_path.clone(), event.value()));
                    },
                }
            }
        }
    }
}

/// Stable DOM id for a field path.
fn element_id(path: &str) -> String {
    format!("field-{}", path.replace('.', "-"))
}

/// The "Please select" placeholder stays selected until the current value
/// matches one of the supplied choices.
fn placeholder_selected(choices: &[SelectChoice], current: &str) -> bool {
    !choices.iter().any(|choice| choice.value == current)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn element_id_flattens_path_segments() {
        assert_eq!(element_id("nosql.primary_key"), "field-nosql-primary_key");
    }

    #[test]
    fn element_id_keeps_single_segment_paths() {
        assert_eq!(element_id("provision_nosql"), "field-provision_nosql");
    }

    #[test]
    fn placeholder_selected_until_a_choice_matches() {
        let choices = vec![SelectChoice::new("DynamoDB", "Amazon DynamoDB")];

        assert!(placeholder_selected(&choices, ""));
        assert!(placeholder_selected(&choices, "Cassandra"));
        assert!(!placeholder_selected(&choices, "DynamoDB"));
    }

    #[test]
    fn placeholder_selected_with_no_choices() {
        assert!(placeholder_selected(&[], ""));
    }
}
