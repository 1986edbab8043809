//! Card Descriptors
//!
//! The feature cards are fixed at build time. Nothing creates, mutates or
//! drops a descriptor at runtime; rendering only iterates the list.

use crate::icons::Glyph;
use crate::theme::ColorToken;

/// Pixel size of every badge icon.
pub const BADGE_ICON_SIZE: u16 = 32;

/// Reference to a catalog template plus the parameters substituted into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentRef {
    /// Catalog key, e.g. `cards.study_smarter.body`
    pub key: &'static str,
    /// `{name}` placeholder values, in no particular order
    pub params: &'static [(&'static str, &'static str)],
}

impl ContentRef {
    pub const fn new(key: &'static str) -> Self {
        Self { key, params: &[] }
    }

    pub const fn with_params(
        key: &'static str,
        params: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { key, params }
    }
}

/// Decorative glyph shown inside the circular badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconRef {
    pub glyph: Glyph,
    pub size: u16,
    pub color: ColorToken,
}

impl IconRef {
    /// Badge icon at the standard size and accent color.
    pub const fn badge(glyph: Glyph) -> Self {
        Self {
            glyph,
            size: BADGE_ICON_SIZE,
            color: ColorToken::Blue600,
        }
    }
}

/// Static record describing one feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDescriptor {
    /// Short label shown under the badge
    pub title: &'static str,
    pub icon: IconRef,
    /// Card background palette token
    pub background: ColorToken,
    /// Card text palette token; `None` falls back to [`ColorToken::DEFAULT_TEXT`]
    pub text: Option<ColorToken>,
    /// Body text, looked up in the string catalog
    pub content: ContentRef,
}

impl CardDescriptor {
    pub fn text_color(&self) -> ColorToken {
        self.text.unwrap_or(ColorToken::DEFAULT_TEXT)
    }
}

/// The four learning feature cards, in display order.
pub const LEARNING_CARDS: [CardDescriptor; 4] = [
    CardDescriptor {
        title: "AI-Driven Learning",
        icon: IconRef::badge(Glyph::Bookmark),
        background: ColorToken::Blue600,
        text: Some(ColorToken::White),
        content: ContentRef::new("cards.ai_driven_learning.body"),
    },
    CardDescriptor {
        title: "Study Smarter",
        icon: IconRef::badge(Glyph::ClipboardList),
        background: ColorToken::Violet600,
        text: Some(ColorToken::White),
        content: ContentRef::new("cards.study_smarter.body"),
    },
    CardDescriptor {
        title: "AI-Generated Questions",
        icon: IconRef::badge(Glyph::File),
        background: ColorToken::Blue500,
        text: Some(ColorToken::White),
        content: ContentRef::new("cards.ai_generated_questions.body"),
    },
    CardDescriptor {
        title: "Track Your Progress",
        icon: IconRef::badge(Glyph::ChartBar),
        background: ColorToken::Violet500,
        text: Some(ColorToken::White),
        content: ContentRef::new("cards.track_your_progress.body"),
    },
];

pub fn learning_cards() -> &'static [CardDescriptor] {
    &LEARNING_CARDS
}
