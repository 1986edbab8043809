//! Rendering Projection
//!
//! Maps card descriptors to fully resolved [`CardView`]s. The projection is
//! total: missing assets degrade the card but never drop it.

use std::sync::Arc;

use crate::descriptor::CardDescriptor;
use crate::icons::{BuiltinIcons, Glyph, IconAsset, IconProvider};
use crate::strings::StringCatalog;
use crate::theme::{ColorToken, StyleTable};

/// Collaborators used to resolve descriptors: text, glyphs and colors.
///
/// Provided to [`LearningCards`](crate::LearningCards) through Dioxus
/// context. Cloning is cheap; all parts are shared.
#[derive(Clone)]
pub struct CardTheme {
    pub catalog: Arc<StringCatalog>,
    pub icons: Arc<dyn IconProvider>,
    pub palette: Arc<StyleTable>,
}

impl Default for CardTheme {
    fn default() -> Self {
        Self::new(StringCatalog::builtin(), BuiltinIcons, StyleTable::default())
    }
}

impl PartialEq for CardTheme {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.catalog, &other.catalog)
            && std::ptr::addr_eq(Arc::as_ptr(&self.icons), Arc::as_ptr(&other.icons))
            && Arc::ptr_eq(&self.palette, &other.palette)
    }
}

impl CardTheme {
    pub fn new(
        catalog: StringCatalog,
        icons: impl IconProvider + 'static,
        palette: StyleTable,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            icons: Arc::new(icons),
            palette: Arc::new(palette),
        }
    }

    /// Resolve one descriptor at `position`.
    pub fn view(&self, position: usize, card: &CardDescriptor) -> CardView {
        let glyph = card.icon.glyph;
        let icon = self.icons.icon(glyph);
        if icon.is_none() {
            tracing::debug!("No icon asset for '{}' on card '{}'", glyph, card.title);
        }

        let text = card.text_color();

        CardView {
            position,
            title: card.title,
            glyph,
            icon,
            icon_size: card.icon.size,
            icon_style: self.palette.icon_style(card.icon.color, card.icon.size),
            badge_style: self.palette.badge_style(),
            background: card.background,
            text,
            card_style: self.palette.card_style(card.background, text),
            body: self.catalog.resolve(&card.content),
        }
    }
}

/// A card with every token and key resolved, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    /// Index in the descriptor list
    pub position: usize,
    pub title: &'static str,
    pub glyph: Glyph,
    /// `None` when the icon provider lacks the glyph
    pub icon: Option<IconAsset>,
    pub icon_size: u16,
    pub icon_style: String,
    pub badge_style: String,
    pub background: ColorToken,
    pub text: ColorToken,
    pub card_style: String,
    pub body: String,
}

/// Lazily project `cards` through `theme`, preserving order.
pub fn project<'a>(
    cards: &'a [CardDescriptor],
    theme: &'a CardTheme,
) -> impl Iterator<Item = CardView> + 'a {
    tracing::debug!("Projecting {} learning cards", cards.len());
    cards
        .iter()
        .enumerate()
        .map(move |(position, card)| theme.view(position, card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::learning_cards;

    struct NoIcons;

    impl IconProvider for NoIcons {
        fn icon(&self, _glyph: Glyph) -> Option<IconAsset> {
            None
        }
    }

    #[test]
    fn projects_every_card_in_order() {
        let theme = CardTheme::default();
        let views: Vec<_> = project(learning_cards(), &theme).collect();

        assert_eq!(views.len(), 4);
        for (i, (view, card)) in views.iter().zip(learning_cards()).enumerate() {
            assert_eq!(view.position, i);
            assert_eq!(view.title, card.title);
            assert_eq!(view.background, card.background);
            assert_eq!(view.glyph, card.icon.glyph);
        }
    }

    #[test]
    fn styles_come_from_palette() {
        let theme = CardTheme::new(
            StringCatalog::builtin(),
            BuiltinIcons,
            StyleTable::default().with_color(ColorToken::Blue600, "#000000"),
        );
        let first = project(learning_cards(), &theme).next().unwrap();

        assert_eq!(first.card_style, "background-color: #000000; color: #ffffff;");
        assert_eq!(first.icon_style, "color: #000000; width: 32px; height: 32px;");
    }

    #[test]
    fn unset_text_color_falls_back_to_default() {
        let theme = CardTheme::default();
        let card = CardDescriptor {
            text: None,
            ..learning_cards()[1]
        };
        let view = theme.view(1, &card);

        assert_eq!(view.text, ColorToken::Gray900);
        assert_eq!(view.card_style, "background-color: #7c3aed; color: #111827;");
    }

    #[test]
    fn badge_style_comes_from_palette() {
        let theme = CardTheme::new(
            StringCatalog::builtin(),
            BuiltinIcons,
            StyleTable::default().with_color(ColorToken::White, "#fedcba"),
        );
        for view in project(learning_cards(), &theme) {
            assert_eq!(view.badge_style, "background-color: #fedcba;");
        }
    }

    #[test]
    fn body_comes_from_catalog() {
        let theme = CardTheme::default();
        let last = project(learning_cards(), &theme).last().unwrap();
        assert!(last.body.starts_with("Monitor your performance"));
    }

    #[test]
    fn missing_assets_degrade_without_dropping_cards() {
        let theme = CardTheme::new(StringCatalog::default(), NoIcons, StyleTable::default());
        let views: Vec<_> = project(learning_cards(), &theme).collect();

        assert_eq!(views.len(), 4);
        assert!(views.iter().all(|v| v.icon.is_none()));
        assert_eq!(views[1].body, "cards.study_smarter.body");
    }

    #[test]
    fn projection_is_idempotent() {
        let theme = CardTheme::default();
        let a: Vec<_> = project(learning_cards(), &theme).collect();
        let b: Vec<_> = project(learning_cards(), &theme).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn theme_equality_is_identity() {
        let theme = CardTheme::default();
        assert!(theme == theme.clone());
        assert!(theme != CardTheme::default());
    }
}
