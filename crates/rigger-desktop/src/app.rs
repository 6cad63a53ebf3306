//! Main application component

use dioxus::prelude::*;

use rigger_core::FormState;

use crate::state::AppState;
use crate::theme::ResolvedTheme;
use crate::views::SettingsForm;

/// Root application component
#[component]
pub fn App() -> Element {
    let form = use_signal(FormState::new);
    let locked = use_signal(|| false);
    let theme = use_signal(ResolvedTheme::default);

    use_context_provider(|| AppState {
        form,
        locked,
        theme,
    });

    let colors = theme().palette();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            SettingsForm {}
        }
    }
}
