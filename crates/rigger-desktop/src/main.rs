//! Rigger Desktop Application
//!
//! A desktop console for editing application provisioning settings.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod theme;
mod views;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rigger=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Rigger...");

    dioxus::launch(app::App);
}
