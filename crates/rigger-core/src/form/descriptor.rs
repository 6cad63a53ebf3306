//! Static field descriptions consumed by the rendering layer

/// One option in a select field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectChoice {
    /// Submitted value
    pub value: String,
    /// Human-readable label
    pub label: String,
}

impl SelectChoice {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The input a field renders as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Boolean checkbox
    Checkbox,
    /// Dropdown over a caller-supplied, ordered choice list. Choices are
    /// rendered exactly as given; duplicate values are a caller authoring
    /// bug and pass through untouched.
    Select {
        /// Ordered options for the dropdown
        choices: Vec<SelectChoice>,
    },
}

/// Explicit description of a single form field
///
/// Every field names its path, label, and kind up front; there is no
/// optional prop shape to probe at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Path into the parent form state
    pub path: String,
    /// Label shown next to the input
    pub label: String,
    /// Input kind
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// A free text field.
    #[must_use]
    pub fn text(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            kind: FieldKind::Text,
        }
    }

    /// A checkbox field.
    #[must_use]
    pub fn checkbox(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            kind: FieldKind::Checkbox,
        }
    }

    /// A select field over the given choices.
    #[must_use]
    pub fn select(
        path: impl Into<String>,
        label: impl Into<String>,
        choices: Vec<SelectChoice>,
    ) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            kind: FieldKind::Select { choices },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn select_keeps_choice_order_and_duplicates() {
        let descriptor = FieldDescriptor::select(
            "nosql.engine",
            "Database engine",
            vec![
                SelectChoice::new("DynamoDB", "Amazon DynamoDB"),
                SelectChoice::new("DynamoDB", "DynamoDB (again)"),
            ],
        );

        let FieldKind::Select { choices } = descriptor.kind else {
            panic!("expected a select descriptor");
        };
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].label, "Amazon DynamoDB");
        assert_eq!(choices[1].label, "DynamoDB (again)");
        assert_eq!(choices[0].value, choices[1].value);
    }
}
