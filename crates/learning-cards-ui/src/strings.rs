//! String Catalog
//!
//! Card bodies live here, not in the descriptors. A catalog maps keys to
//! templates; `{name}` placeholders are filled from [`ContentRef::params`]
//! and `{{` / `}}` stand for literal braces.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::descriptor::ContentRef;

/// Errors raised while loading or formatting catalog entries
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No template is registered under the key
    #[error("Missing string key: {0}")]
    MissingKey(String),

    /// Template references a parameter the caller did not supply
    #[error("Missing parameter '{param}' for key {key}")]
    MissingParam { key: String, param: String },

    /// Template opens a placeholder it never closes
    #[error("Unterminated placeholder in key {0}")]
    Unterminated(String),

    /// Catalog file is not a JSON object of strings
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

const BUILTIN_EN: [(&str, &str); 4] = [
    (
        "cards.ai_driven_learning.body",
        "Get personalized feedback when you miss a question. Our AI identifies gaps and provides targeted help to boost your understanding.",
    ),
    (
        "cards.study_smarter.body",
        "Generate custom study guides with AI. Focus on topics you need the most help with, and learn efficiently.",
    ),
    (
        "cards.ai_generated_questions.body",
        "Let AI do the work! Automatically create challenging, tailored questions to enhance your learning experience.",
    ),
    (
        "cards.track_your_progress.body",
        "Monitor your performance with detailed reports and progress tracking. Watch your skills improve over time!",
    ),
];

/// Key to template map, stored as a flat JSON object on disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringCatalog {
    entries: BTreeMap<String, String>,
}

impl StringCatalog {
    /// English text bundled with the crate.
    pub fn builtin() -> Self {
        let entries = BUILTIN_EN
            .iter()
            .map(|(key, text)| (key.to_string(), text.to_string()))
            .collect();
        Self { entries }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(
            "Loaded {} catalog entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Entries in `overrides` win over entries in `self`.
    pub fn merge(mut self, overrides: StringCatalog) -> Self {
        self.entries.extend(overrides.entries);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fill the template behind `content` with its parameters.
    pub fn format(&self, content: &ContentRef) -> Result<String> {
        let template = self
            .get(content.key)
            .ok_or_else(|| CatalogError::MissingKey(content.key.to_string()))?;
        interpolate(content.key, template, content.params)
    }

    /// Like [`format`](Self::format), but never fails: a broken entry
    /// renders as its key.
    pub fn resolve(&self, content: &ContentRef) -> String {
        match self.format(content) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Falling back to raw key: {}", e);
                content.key.to_string()
            }
        }
    }
}

/// Substitute `{name}` placeholders in `template`.
pub fn interpolate(key: &str, template: &str, params: &[(&str, &str)]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '{' => {
                if let Some(&(_, '{')) = chars.peek() {
                    chars.next();
                    out.push('{');
                    continue;
                }

                let rest = &template[i + 1..];
                let end = rest
                    .find('}')
                    .ok_or_else(|| CatalogError::Unterminated(key.to_string()))?;
                let name = &rest[..end];
                let value = params
                    .iter()
                    .find(|(param, _)| *param == name)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| CatalogError::MissingParam {
                        key: key.to_string(),
                        param: name.to_string(),
                    })?;
                out.push_str(value);

                // Placeholder name plus the closing brace
                for _ in 0..=name.chars().count() {
                    chars.next();
                }
            }
            '}' => {
                if let Some(&(_, '}')) = chars.peek() {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
