//! Learning Cards UI Components
//!
//! This crate provides the Dioxus components for the "learning features"
//! marketing section: four static cards, each with an icon badge, a title
//! and a short description.
//!
//! ## Layers
//!
//! - [`descriptor`]: the fixed card list, declared as a constant
//! - [`strings`]: catalog of localizable body text, keyed by [`ContentRef`]
//! - [`icons`]: glyph assets behind the [`IconProvider`] seam
//! - [`theme`]: palette tokens resolved through an explicit [`StyleTable`]
//! - [`projection`]: pure mapping from descriptors to resolved [`CardView`]s
//! - [`components`]: the Dioxus components rendering those views

pub mod components;
pub mod descriptor;
pub mod icons;
pub mod projection;
pub mod strings;
pub mod theme;

pub use components::*;
pub use descriptor::{learning_cards, CardDescriptor, ContentRef, IconRef, LEARNING_CARDS};
pub use icons::{BuiltinIcons, Glyph, IconAsset, IconProvider};
pub use projection::{project, CardTheme, CardView};
pub use strings::{CatalogError, StringCatalog};
pub use theme::{ColorToken, StyleTable, LEARNING_CARDS_STYLES};
