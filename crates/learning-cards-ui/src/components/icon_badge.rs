//! Icon Badge Component
//!
//! Circular badge holding a card's glyph.

use dioxus::prelude::*;

use crate::icons::{Glyph, IconAsset};

/// Circular badge with an inline SVG glyph
///
/// The badge is always rendered. When the icon provider had no asset for
/// the glyph it stays empty but keeps its accessible label.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     IconBadge {
///         glyph: Glyph::Bookmark,
///         icon: BuiltinIcons.icon(Glyph::Bookmark),
///         size: 32,
///         icon_style: "color: #2563eb;".to_string(),
///         badge_style: "background-color: #ffffff;".to_string(),
///     }
/// }
/// ```
#[component]
pub fn IconBadge(
    /// Symbol name, used for `data-glyph` and the accessible label
    glyph: Glyph,
    /// SVG data, if the provider has it
    icon: Option<IconAsset>,
    /// Rendered width and height in pixels
    size: u16,
    /// Inline style for the glyph (color and size)
    icon_style: String,
    /// Inline style for the badge circle (fill)
    badge_style: String,
) -> Element {
    let glyph_name = glyph.name();

    rsx! {
        div {
            class: "icon-badge",
            style: "{badge_style}",
            role: "img",
            "aria-label": "{glyph_name}",
            "data-glyph": "{glyph_name}",

            if let Some(asset) = icon {
                svg {
                    class: "icon-badge__glyph",
                    "viewBox": "{asset.view_box}",
                    width: "{size}",
                    height: "{size}",
                    fill: "currentColor",
                    style: "{icon_style}",
                    path { d: "{asset.path}" }
                }
            }
        }
    }
}
