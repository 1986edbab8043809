use dioxus::prelude::*;
use learning_cards_ui::{CardTheme, LearningCards, LEARNING_CARDS_STYLES};

use crate::context::card_theme;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the card theme configured at startup.
#[component]
pub fn App() -> Element {
    let theme = use_hook(card_theme);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {LEARNING_CARDS_STYLES} }
        Page { theme: theme }
    }
}

/// Host page for the learning cards section.
///
/// Shared by the desktop window and the static export. The theme is put in
/// context on first render only; both hosts build it once at startup.
#[component]
pub fn Page(theme: CardTheme) -> Element {
    use_context_provider(|| theme.clone());

    rsx! {
        main { class: "page",
            LearningCards {}
        }
    }
}
