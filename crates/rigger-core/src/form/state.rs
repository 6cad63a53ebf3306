//! Parent-owned form state and the update events that change it

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single form field value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checkbox state
    Bool(bool),
    /// Text or select content
    Text(String),
}

impl FieldValue {
    /// Read as a boolean; text values read as false.
    #[must_use]
    pub const fn as_bool(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Read as text; boolean values read as empty.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Bool(_) => "",
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A requested change to one field, dispatched by a component to the form
/// that owns the state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    /// Path of the field being changed
    pub path: String,
    /// The new value
    pub value: FieldValue,
}

impl FieldUpdate {
    /// Update carrying new text content.
    pub fn text(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: FieldValue::Text(value.into()),
        }
    }

    /// Update carrying a new checkbox state.
    pub fn flag(path: impl Into<String>, value: bool) -> Self {
        Self {
            path: path.into(),
            value: FieldValue::Bool(value),
        }
    }
}

/// Field values keyed by path (e.g. `"nosql.primary_key"`)
///
/// Owned by the parent form. Components read values through the total
/// accessors below and request changes with [`FieldUpdate`]; they never
/// write here directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    fields: BTreeMap<String, FieldValue>,
}

impl FormState {
    /// Empty form state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value directly (host-side seeding).
    pub fn set(&mut self, path: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(path.into(), value.into());
    }

    /// Raw value at a path, if any.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FieldValue> {
        self.fields.get(path)
    }

    /// Boolean at a path; missing or text values read as false.
    #[must_use]
    pub fn bool_at(&self, path: &str) -> bool {
        self.fields.get(path).is_some_and(FieldValue::as_bool)
    }

    /// Text at a path; missing or boolean values read as empty.
    #[must_use]
    pub fn text_at(&self, path: &str) -> &str {
        self.fields.get(path).map_or("", FieldValue::as_text)
    }

    /// Apply an update dispatched by a component.
    pub fn apply(&mut self, update: FieldUpdate) {
        self.fields.insert(update.path, update.value);
    }

    /// Parse a flat JSON object of string and boolean values.
    ///
    /// Non-object documents fail with [`Error::Serialization`]; object
    /// entries of any other JSON type fail with [`Error::InvalidInput`].
    pub fn from_json(payload: &str) -> Result<Self> {
        let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(payload)?;

        let mut fields = BTreeMap::new();
        for (path, value) in document {
            let value = match value {
                serde_json::Value::Bool(flag) => FieldValue::Bool(flag),
                serde_json::Value::String(text) => FieldValue::Text(text),
                other => {
                    return Err(Error::InvalidInput(format!(
                        "field `{path}` has unsupported value {other}"
                    )))
                }
            };
            fields.insert(path, value);
        }

        Ok(Self { fields })
    }

    /// Serialize back to the flat JSON object shape.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
