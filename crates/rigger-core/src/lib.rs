//! rigger-core - Core library for Rigger
//!
//! This crate contains the form-state model, field descriptors, and the
//! provisioning settings types used by the Rigger desktop app.

pub mod error;
pub mod form;
pub mod models;

pub use error::{Error, Result};
pub use form::{
    ConditionalGroup, FieldDescriptor, FieldKind, FieldRow, FieldUpdate, FieldValue, FormState,
    SelectChoice,
};
pub use models::NoSqlDatabase;
