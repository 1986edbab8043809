//! Palette tokens and the card stylesheet.

mod palette;
mod styles;

pub use palette::{ColorToken, StyleTable};
pub use styles::LEARNING_CARDS_STYLES;
