//! NoSQL database provisioning settings

use serde::{Deserialize, Serialize};

use crate::form::{ConditionalGroup, FieldDescriptor, FormState, SelectChoice};

/// Form path for the governing provisioning flag
pub const PROVISION_NOSQL: &str = "provision_nosql";
/// Form path for the database engine selector
pub const NOSQL_ENGINE: &str = "nosql.engine";
/// Form path for the table primary key
pub const NOSQL_PRIMARY_KEY: &str = "nosql.primary_key";

/// Engine assumed when the form never offered or filled a selector
const DEFAULT_ENGINE: &str = "DynamoDB";

/// Optional NoSQL database settings for an application environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoSqlDatabase {
    /// Database engine identifier
    pub engine: String,
    /// Primary key of the provisioned table
    pub primary_key: String,
}

impl Default for NoSqlDatabase {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            primary_key: String::new(),
        }
    }
}

impl NoSqlDatabase {
    /// Extract the settings from a form, or `None` while provisioning is
    /// switched off. Stale dependent values left behind by an unchecked
    /// toggle never leak into the model.
    #[must_use]
    pub fn from_form(state: &FormState) -> Option<Self> {
        if !state.bool_at(PROVISION_NOSQL) {
            return None;
        }

        let engine = state.text_at(NOSQL_ENGINE);
        Some(Self {
            engine: if engine.is_empty() {
                DEFAULT_ENGINE.to_string()
            } else {
                engine.to_string()
            },
            primary_key: state.text_at(NOSQL_PRIMARY_KEY).to_string(),
        })
    }

    /// Write the settings back into a form state for editing.
    pub fn seed_form(&self, state: &mut FormState) {
        state.set(PROVISION_NOSQL, true);
        state.set(NOSQL_ENGINE, self.engine.clone());
        state.set(NOSQL_PRIMARY_KEY, self.primary_key.clone());
    }

    /// Field group for the NoSQL section of the settings form.
    ///
    /// An empty engine list omits the selector, leaving the primary-key
    /// field as the only dependent.
    #[must_use]
    pub fn field_group(engines: &[SelectChoice]) -> ConditionalGroup {
        let mut dependents = Vec::new();
        if !engines.is_empty() {
            dependents.push(FieldDescriptor::select(
                NOSQL_ENGINE,
                "Database engine",
                engines.to_vec(),
            ));
        }
        dependents.push(FieldDescriptor::text(
            NOSQL_PRIMARY_KEY,
            "Please enter the primary key",
        ));

        ConditionalGroup::new(
            FieldDescriptor::checkbox(PROVISION_NOSQL, "Configure No SQL Database"),
            dependents,
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::form::FieldKind;

    use super::*;

    #[test]
    fn default_engine_is_dynamodb() {
        assert_eq!(NoSqlDatabase::default().engine, "DynamoDB");
    }

    #[test]
    fn from_form_is_none_while_provisioning_is_off() {
        let mut state = FormState::new();
        state.set(NOSQL_PRIMARY_KEY, "tenant_id");

        assert_eq!(NoSqlDatabase::from_form(&state), None);
    }

    #[test]
    fn from_form_falls_back_to_the_default_engine() {
        let mut state = FormState::new();
        state.set(PROVISION_NOSQL, true);
        state.set(NOSQL_PRIMARY_KEY, "tenant_id");

        let database = NoSqlDatabase::from_form(&state).unwrap();
        assert_eq!(database.engine, "DynamoDB");
        assert_eq!(database.primary_key, "tenant_id");
    }

    #[test]
    fn seed_form_round_trips_through_from_form() {
        let database = NoSqlDatabase {
            engine: "DynamoDB".to_string(),
            primary_key: "order_id".to_string(),
        };

        let mut state = FormState::new();
        database.seed_form(&mut state);

        assert_eq!(NoSqlDatabase::from_form(&state), Some(database));
    }

    #[test]
    fn wire_format_uses_camel_case_keys() {
        let database = NoSqlDatabase {
            engine: "DynamoDB".to_string(),
            primary_key: "tenant_id".to_string(),
        };

        let payload = serde_json::to_string(&database).unwrap();
        assert_eq!(
            payload,
            r#"{"engine":"DynamoDB","primaryKey":"tenant_id"}"#
        );
    }

    #[test]
    fn field_group_with_engines_has_select_then_primary_key() {
        let group = NoSqlDatabase::field_group(&[SelectChoice::new("DynamoDB", "Amazon DynamoDB")]);

        assert_eq!(group.governing.path, PROVISION_NOSQL);
        assert_eq!(group.dependents.len(), 2);
        assert_eq!(group.dependents[0].path, NOSQL_ENGINE);
        assert!(matches!(
            group.dependents[0].kind,
            FieldKind::Select { .. }
        ));
        assert_eq!(group.dependents[1].path, NOSQL_PRIMARY_KEY);
        assert_eq!(group.dependents[1].kind, FieldKind::Text);
    }

    #[test]
    fn field_group_without_engines_omits_the_selector() {
        let group = NoSqlDatabase::field_group(&[]);

        assert_eq!(group.dependents.len(), 1);
        assert_eq!(group.dependents[0].path, NOSQL_PRIMARY_KEY);
    }
}
