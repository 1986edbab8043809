//! Learning Cards Section
//!
//! Responsive grid of the four learning feature cards.

use dioxus::prelude::*;

use super::IconBadge;
use crate::descriptor::learning_cards;
use crate::projection::{project, CardTheme, CardView};

/// The learning features section
///
/// Takes no props. Text, glyphs and colors come from the [`CardTheme`] in
/// context; without one the built-in theme is used.
///
/// # Example
///
/// ```rust,ignore
/// #[component]
/// fn Home() -> Element {
///     use_context_provider(CardTheme::default);
///
///     rsx! {
///         main { LearningCards {} }
///     }
/// }
/// ```
#[component]
pub fn LearningCards() -> Element {
    let theme = try_use_context::<CardTheme>().unwrap_or_default();
    let cards: Vec<CardView> = project(learning_cards(), &theme).collect();
    let section_style = theme.palette.section_style();

    rsx! {
        section { class: "learning-cards", style: "{section_style}",
            div { class: "learning-cards__grid",
                for card in cards {
                    {
                        let position = card.position;
                        rsx! {
                            LearningCard { key: "{position}", card: card }
                        }
                    }
                }
            }
        }
    }
}

/// A single feature card: badge, title, then the body centered below
#[component]
pub fn LearningCard(card: CardView) -> Element {
    rsx! {
        div {
            class: "learning-card",
            style: "{card.card_style}",
            "data-card-position": "{card.position}",
            "data-background": "{card.background}",
            "data-text": "{card.text}",

            // Icon and title
            div { class: "learning-card__header",
                div { class: "learning-card__badge-row",
                    IconBadge {
                        glyph: card.glyph,
                        icon: card.icon.clone(),
                        size: card.icon_size,
                        icon_style: card.icon_style.clone(),
                        badge_style: card.badge_style.clone(),
                    }
                }
                h2 { class: "learning-card__title", "{card.title}" }
            }

            div { class: "learning-card__body",
                p { class: "learning-card__text", "{card.body}" }
            }
        }
    }
}
