//! Dioxus components for the learning cards section.

mod icon_badge;
mod learning_cards;

pub use icon_badge::*;
pub use learning_cards::*;
