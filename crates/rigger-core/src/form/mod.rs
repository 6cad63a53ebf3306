//! Form model shared between a parent form and its field components

mod descriptor;
mod group;
mod state;

pub use descriptor::{FieldDescriptor, FieldKind, SelectChoice};
pub use group::{ConditionalGroup, FieldRow};
pub use state::{FieldUpdate, FieldValue, FormState};
