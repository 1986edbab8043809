//! Palette Tokens
//!
//! Cards name their colors by token. [`StyleTable`] is the single place a
//! token becomes a CSS value, so the mapping can be checked without a
//! renderer.

use std::collections::HashMap;
use std::fmt;

/// Palette token used by card descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Blue500,
    Blue600,
    Violet500,
    Violet600,
    White,
    Gray50,
    Gray900,
}

impl ColorToken {
    /// Text token for cards that do not set one.
    pub const DEFAULT_TEXT: ColorToken = ColorToken::Gray900;

    /// Backdrop behind the card grid.
    pub const SECTION_BACKGROUND: ColorToken = ColorToken::Gray50;

    /// Fill of the circular icon badge.
    pub const BADGE_BACKGROUND: ColorToken = ColorToken::White;

    pub const ALL: [ColorToken; 7] = [
        ColorToken::Blue500,
        ColorToken::Blue600,
        ColorToken::Violet500,
        ColorToken::Violet600,
        ColorToken::White,
        ColorToken::Gray50,
        ColorToken::Gray900,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ColorToken::Blue500 => "blue-500",
            ColorToken::Blue600 => "blue-600",
            ColorToken::Violet500 => "violet-500",
            ColorToken::Violet600 => "violet-600",
            ColorToken::White => "white",
            ColorToken::Gray50 => "gray-50",
            ColorToken::Gray900 => "gray-900",
        }
    }

    /// Stock CSS value for this token.
    fn default_value(&self) -> &'static str {
        match self {
            ColorToken::Blue500 => "#3b82f6",
            ColorToken::Blue600 => "#2563eb",
            ColorToken::Violet500 => "#8b5cf6",
            ColorToken::Violet600 => "#7c3aed",
            ColorToken::White => "#ffffff",
            ColorToken::Gray50 => "#f9fafb",
            ColorToken::Gray900 => "#111827",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Token to CSS color lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleTable {
    colors: HashMap<ColorToken, String>,
}

impl Default for StyleTable {
    fn default() -> Self {
        let colors = ColorToken::ALL
            .iter()
            .map(|token| (*token, token.default_value().to_string()))
            .collect();
        Self { colors }
    }
}

impl StyleTable {
    /// Replace the CSS value of one token.
    pub fn with_color(mut self, token: ColorToken, value: impl Into<String>) -> Self {
        self.colors.insert(token, value.into());
        self
    }

    pub fn color(&self, token: ColorToken) -> &str {
        self.colors
            .get(&token)
            .map(String::as_str)
            .unwrap_or_else(|| token.default_value())
    }

    /// Inline style for a card surface.
    pub fn card_style(&self, background: ColorToken, text: ColorToken) -> String {
        format!(
            "background-color: {}; color: {};",
            self.color(background),
            self.color(text)
        )
    }

    /// Inline style for the section backdrop.
    pub fn section_style(&self) -> String {
        format!(
            "background-color: {};",
            self.color(ColorToken::SECTION_BACKGROUND)
        )
    }

    /// Inline style for the badge circle.
    pub fn badge_style(&self) -> String {
        format!(
            "background-color: {};",
            self.color(ColorToken::BADGE_BACKGROUND)
        )
    }

    /// Inline style for a badge glyph.
    pub fn icon_style(&self, color: ColorToken, size: u16) -> String {
        format!(
            "color: {}; width: {size}px; height: {size}px;",
            self.color(color)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_uses_stock_palette() {
        let table = StyleTable::default();
        assert_eq!(table.color(ColorToken::Blue600), "#2563eb");
        assert_eq!(table.color(ColorToken::Violet500), "#8b5cf6");
        assert_eq!(table.color(ColorToken::White), "#ffffff");
    }

    #[test]
    fn every_token_resolves() {
        let table = StyleTable::default();
        for token in ColorToken::ALL {
            assert!(table.color(token).starts_with('#'), "{token} unresolved");
        }
    }

    #[test]
    fn override_replaces_single_token() {
        let table = StyleTable::default().with_color(ColorToken::Blue600, "rebeccapurple");
        assert_eq!(table.color(ColorToken::Blue600), "rebeccapurple");
        assert_eq!(table.color(ColorToken::Blue500), "#3b82f6");
    }

    #[test]
    fn card_style_combines_background_and_text() {
        let style = StyleTable::default().card_style(ColorToken::Violet600, ColorToken::White);
        assert_eq!(style, "background-color: #7c3aed; color: #ffffff;");
    }

    #[test]
    fn icon_style_includes_size() {
        let style = StyleTable::default().icon_style(ColorToken::Blue600, 32);
        assert_eq!(style, "color: #2563eb; width: 32px; height: 32px;");
    }

    #[test]
    fn section_and_badge_styles_follow_overrides() {
        let table = StyleTable::default();
        assert_eq!(table.section_style(), "background-color: #f9fafb;");
        assert_eq!(table.badge_style(), "background-color: #ffffff;");

        let table = table
            .with_color(ColorToken::Gray50, "#abcdef")
            .with_color(ColorToken::White, "#fedcba");
        assert_eq!(table.section_style(), "background-color: #abcdef;");
        assert_eq!(table.badge_style(), "background-color: #fedcba;");
    }

    #[test]
    fn token_names() {
        assert_eq!(ColorToken::Gray900.to_string(), "gray-900");
        assert_eq!(ColorToken::DEFAULT_TEXT, ColorToken::Gray900);
    }
}
