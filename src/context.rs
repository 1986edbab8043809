//! Startup configuration shared with the UI.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use learning_cards_ui::{BuiltinIcons, CardTheme, StringCatalog, StyleTable};

/// Theme built from command line options
static CARD_THEME: OnceLock<CardTheme> = OnceLock::new();

/// Store the theme used by [`App`](crate::app::App).
pub fn init_card_theme(catalog: StringCatalog) {
    let theme = CardTheme::new(catalog, BuiltinIcons, StyleTable::default());
    let _ = CARD_THEME.set(theme);
}

/// Get the startup theme (built-in if none was stored)
pub fn card_theme() -> CardTheme {
    CARD_THEME.get().cloned().unwrap_or_default()
}

/// Per-user catalog location, e.g. `~/.config/learning-cards/strings.json`
pub fn default_strings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("learning-cards").join("strings.json"))
}

/// Built-in catalog with any overrides merged on top.
///
/// An explicit path must load. The per-user file is optional and skipped
/// with a warning when broken.
pub fn load_catalog(explicit: Option<&Path>) -> anyhow::Result<StringCatalog> {
    let builtin = StringCatalog::builtin();

    if let Some(path) = explicit {
        let overrides = StringCatalog::load(path)
            .with_context(|| format!("failed to load string catalog {}", path.display()))?;
        tracing::info!("Using string catalog {}", path.display());
        return Ok(builtin.merge(overrides));
    }

    match default_strings_path() {
        Some(path) if path.exists() => Ok(merge_optional(builtin, &path)),
        _ => Ok(builtin),
    }
}

fn merge_optional(builtin: StringCatalog, path: &Path) -> StringCatalog {
    match StringCatalog::load(path) {
        Ok(overrides) => {
            tracing::info!("Using string catalog {}", path.display());
            builtin.merge(overrides)
        }
        Err(e) => {
            tracing::warn!("Ignoring string catalog {}: {}", path.display(), e);
            builtin
        }
    }
}
