//! Application views

mod settings_form;

pub use settings_form::SettingsForm;
