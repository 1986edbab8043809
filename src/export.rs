//! Static HTML export of the learning cards section.

use dioxus::prelude::*;
use learning_cards_ui::{CardTheme, LEARNING_CARDS_STYLES};

use crate::app::Page;
use crate::theme::GLOBAL_STYLES;

/// Render the section into a standalone HTML document.
pub fn render_document(theme: &CardTheme) -> String {
    let body = dioxus_ssr::render_element(rsx! {
        Page { theme: theme.clone() }
    });

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Learning Cards</title>\n<style>{GLOBAL_STYLES}{LEARNING_CARDS_STYLES}</style>\n\
         </head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_wraps_section() {
        let html = render_document(&CardTheme::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(".learning-card {"));
        assert!(html.contains("class=\"page\""));
        assert_eq!(html.matches("data-card-position=").count(), 4);
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn document_uses_given_theme() {
        use learning_cards_ui::{BuiltinIcons, ColorToken, StringCatalog, StyleTable};

        let theme = CardTheme::new(
            StringCatalog::builtin(),
            BuiltinIcons,
            StyleTable::default().with_color(ColorToken::Gray50, "#abcdef"),
        );
        let html = render_document(&theme);
        assert!(html.contains("background-color: #abcdef;"));
    }
}
