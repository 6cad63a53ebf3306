//! Checkbox-governed groups of dependent fields

use super::descriptor::{FieldDescriptor, FieldKind};
use super::state::{FieldUpdate, FieldValue, FormState};

/// A boolean governing field and the dependent fields it reveals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalGroup {
    /// Checkbox controlling visibility of the dependents
    pub governing: FieldDescriptor,
    /// Fields shown only while the governing flag is true
    pub dependents: Vec<FieldDescriptor>,
}

/// Render plan for one dependent field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    /// The field being rendered
    pub descriptor: FieldDescriptor,
    /// Current value, defaulted when the state has none
    pub value: FieldValue,
    /// Whether the input is read-only in this render
    pub disabled: bool,
}

impl ConditionalGroup {
    /// The governing descriptor must be a checkbox.
    #[must_use]
    pub fn new(governing: FieldDescriptor, dependents: Vec<FieldDescriptor>) -> Self {
        debug_assert!(
            matches!(governing.kind, FieldKind::Checkbox),
            "governing field must be a checkbox"
        );
        Self {
            governing,
            dependents,
        }
    }

    /// Whether the dependent block is revealed. A missing governing value
    /// reads as false.
    #[must_use]
    pub fn is_expanded(&self, state: &FormState) -> bool {
        state.bool_at(&self.governing.path)
    }

    /// The single update that toggles the governing flag.
    ///
    /// Untoggling does not clear dependent values; they stay in the parent
    /// state and reappear when the flag is set again.
    #[must_use]
    pub fn toggle(&self, state: &FormState) -> FieldUpdate {
        FieldUpdate::flag(self.governing.path.as_str(), !self.is_expanded(state))
    }

    /// Dependent descriptors visible for the current state: all of them
    /// while expanded, none otherwise.
    #[must_use]
    pub fn visible_dependents(&self, state: &FormState) -> &[FieldDescriptor] {
        if self.is_expanded(state) {
            &self.dependents
        } else {
            &[]
        }
    }

    /// Render rows for the visible dependents. `locked` disables every row
    /// without hiding any of them.
    #[must_use]
    pub fn dependent_rows(&self, state: &FormState, locked: bool) -> Vec<FieldRow> {
        self.visible_dependents(state)
            .iter()
            .map(|descriptor| {
                let value = match descriptor.kind {
                    FieldKind::Checkbox => FieldValue::Bool(state.bool_at(&descriptor.path)),
                    FieldKind::Text | FieldKind::Select { .. } => {
                        FieldValue::Text(state.text_at(&descriptor.path).to_string())
                    }
                };
                FieldRow {
                    descriptor: descriptor.clone(),
                    value,
                    disabled: locked,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::descriptor::SelectChoice;
    use super::*;

    fn nosql_group() -> ConditionalGroup {
        ConditionalGroup::new(
            FieldDescriptor::checkbox("provision_nosql", "Configure No SQL Database"),
            vec![
                FieldDescriptor::select(
                    "nosql.engine",
                    "Database engine",
                    vec![SelectChoice::new("DynamoDB", "Amazon DynamoDB")],
                ),
                FieldDescriptor::text("nosql.primary_key", "Please enter the primary key"),
            ],
        )
    }

    #[test]
    fn dependents_visible_iff_governing_is_true() {
        let group = nosql_group();
        let mut state = FormState::new();

        assert!(group.visible_dependents(&state).is_empty());

        state.set("provision_nosql", true);
        assert_eq!(group.visible_dependents(&state).len(), 2);

        state.set("provision_nosql", false);
        assert!(group.visible_dependents(&state).is_empty());
    }

    #[test]
    fn missing_governing_value_reads_as_collapsed() {
        let group = nosql_group();
        let state = FormState::new();

        assert!(!group.is_expanded(&state));
        assert!(group.dependent_rows(&state, false).is_empty());
    }

    #[test]
    fn toggle_emits_one_update_with_the_negated_flag() {
        let group = nosql_group();
        let mut state = FormState::new();

        let update = group.toggle(&state);
        assert_eq!(update, FieldUpdate::flag("provision_nosql", true));

        state.apply(update);
        let update = group.toggle(&state);
        assert_eq!(update, FieldUpdate::flag("provision_nosql", false));
    }

    #[test]
    fn locked_disables_every_row_without_hiding_it() {
        let group = nosql_group();
        let mut state = FormState::new();
        state.set("provision_nosql", true);

        let rows = group.dependent_rows(&state, true);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.disabled));

        let rows = group.dependent_rows(&state, false);
        assert!(rows.iter().all(|row| !row.disabled));
    }

    #[test]
    fn rows_default_missing_values_to_empty() {
        let group = nosql_group();
        let mut state = FormState::new();
        state.set("provision_nosql", true);

        let rows = group.dependent_rows(&state, false);
        assert_eq!(rows[0].value, FieldValue::Text(String::new()));
        assert_eq!(rows[1].value, FieldValue::Text(String::new()));
    }

    #[test]
    fn untoggling_preserves_dependent_values_in_state() {
        let group = nosql_group();
        let mut state = FormState::new();
        state.set("provision_nosql", true);
        state.set("nosql.primary_key", "tenant_id");

        state.apply(group.toggle(&state));

        assert!(group.dependent_rows(&state, false).is_empty());
        assert_eq!(state.text_at("nosql.primary_key"), "tenant_id");

        state.apply(group.toggle(&state));
        let rows = group.dependent_rows(&state, false);
        assert_eq!(rows[1].value, FieldValue::Text("tenant_id".to_string()));
    }
}
