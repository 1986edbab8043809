//! Badge Icons
//!
//! Glyphs are named symbols; an [`IconProvider`] turns a name into inline
//! SVG data. The built-in set covers every glyph the card list uses.

use std::fmt;

/// Named decorative symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Bookmark,
    ClipboardList,
    File,
    ChartBar,
}

impl Glyph {
    pub const ALL: [Glyph; 4] = [
        Glyph::Bookmark,
        Glyph::ClipboardList,
        Glyph::File,
        Glyph::ChartBar,
    ];

    /// Kebab-case asset name
    pub fn name(&self) -> &'static str {
        match self {
            Glyph::Bookmark => "bookmark",
            Glyph::ClipboardList => "clipboard-list",
            Glyph::File => "file",
            Glyph::ChartBar => "chart-bar",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inline SVG data for one glyph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconAsset {
    pub view_box: &'static str,
    pub path: &'static str,
}

/// Supplies glyph assets by name.
pub trait IconProvider: Send + Sync {
    /// Returns `None` when the provider has no asset for `glyph`.
    fn icon(&self, glyph: Glyph) -> Option<IconAsset>;
}

const VIEW_BOX: &str = "0 0 24 24";

/// Solid 24x24 glyphs bundled with the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinIcons;

impl IconProvider for BuiltinIcons {
    fn icon(&self, glyph: Glyph) -> Option<IconAsset> {
        let path = match glyph {
            Glyph::Bookmark => "M6 2h12a1 1 0 0 1 1 1v19l-7-4.5L5 22V3a1 1 0 0 1 1-1z",
            Glyph::ClipboardList => {
                "M9 2h6a1 1 0 0 1 1 1v1h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2V3a1 1 0 0 1 1-1zm0 2v2h6V4H9zm-1 6v2h2v-2H8zm4 0v2h4v-2h-4zm-4 4v2h2v-2H8zm4 0v2h4v-2h-4z"
            }
            Glyph::File => "M6 2h8l6 6v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zm7 1.5V9h5.5L13 3.5z",
            Glyph::ChartBar => "M3 3h2v16h16v2H3V3zm4 9h3v5H7v-5zm5-5h3v10h-3V7zm5 3h3v7h-3v-7z",
        };

        Some(IconAsset {
            view_box: VIEW_BOX,
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_glyph() {
        for glyph in Glyph::ALL {
            let asset = BuiltinIcons.icon(glyph).expect("builtin asset");
            assert_eq!(asset.view_box, "0 0 24 24");
            assert!(asset.path.starts_with('M'));
        }
    }

    #[test]
    fn glyph_names_are_kebab_case() {
        assert_eq!(Glyph::ClipboardList.name(), "clipboard-list");
        assert_eq!(Glyph::ChartBar.to_string(), "chart-bar");
    }
}
