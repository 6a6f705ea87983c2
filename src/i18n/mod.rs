//! Localizable text and translation catalogs.
//!
//! Components never translate ambiently: a [`Translate`] implementation is
//! handed to them at construction.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Interpolation values for a structured message.
pub type Values = BTreeMap<String, String>;

/// Text that is translated at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizableText {
    /// Source text with no interpolation values.
    Plain(String),
    /// Source text plus values substituted into `{name}` slots.
    Structured { text: String, values: Values },
}

impl LocalizableText {
    /// Resolve through a translator.
    ///
    /// Plain text is translated with no values; structured text passes its map.
    pub fn resolve(&self, translate: &dyn Translate) -> String {
        match self {
            LocalizableText::Plain(text) => translate.translate(text, None),
            LocalizableText::Structured { text, values } => translate.translate(text, Some(values)),
        }
    }
}

impl Default for LocalizableText {
    fn default() -> Self {
        LocalizableText::Plain(String::new())
    }
}

impl From<&str> for LocalizableText {
    fn from(text: &str) -> Self {
        LocalizableText::Plain(text.to_string())
    }
}

impl From<String> for LocalizableText {
    fn from(text: String) -> Self {
        LocalizableText::Plain(text)
    }
}

/// Translation lookup.
pub trait Translate {
    /// Translate `text` for the active locale, substituting `values`.
    fn translate(&self, text: &str, values: Option<&Values>) -> String;
}

/// Message table for one locale.
///
/// Keys are source strings. Missing keys fall back to the source text itself.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Catalog {
    /// A catalog that returns source text unchanged.
    pub fn identity(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
        }
    }

    /// Build a catalog from an in-memory table.
    pub fn from_messages(locale: impl Into<String>, messages: HashMap<String, String>) -> Self {
        Self {
            locale: locale.into(),
            messages,
        }
    }

    /// Load `<dir>/<locale>.json`, falling back to the base language
    /// (`pt-BR` -> `pt`).
    pub fn load(dir: &Path, locale: &str) -> Result<Self> {
        let mut candidates = vec![locale.to_string()];
        if let Some((base, _)) = locale.split_once(['-', '_']) {
            candidates.push(base.to_string());
        }

        for candidate in &candidates {
            let path = dir.join(format!("{}.json", candidate));
            if !path.exists() {
                continue;
            }
            let raw = std::fs::read_to_string(&path)?;
            let messages: HashMap<String, String> = serde_json::from_str(&raw)?;
            tracing::debug!(locale = %candidate, entries = messages.len(), "Loaded translation catalog");
            return Ok(Self::from_messages(candidate.clone(), messages));
        }

        Err(Error::Catalog {
            locale: locale.to_string(),
            dir: dir.to_path_buf(),
        })
    }

    /// Load the catalog for `locale`, or an identity catalog when there is
    /// no directory or no usable file.
    pub fn load_or_identity(dir: Option<&Path>, locale: &str) -> Self {
        let Some(dir) = dir else {
            tracing::warn!(locale, "No translation directory, showing source text");
            return Self::identity(locale);
        };
        match Self::load(dir, locale) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(locale, "Falling back to source text: {}", e);
                Self::identity(locale)
            }
        }
    }

    /// Locale this catalog was loaded for.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of translated entries.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, text: &str, values: Option<&Values>) -> String {
        let message = self.messages.get(text).map(String::as_str).unwrap_or(text);
        match values {
            Some(values) => interpolate(message, values),
            None => message.to_string(),
        }
    }
}

/// Substitute `{name}` slots. Slots with no matching value stay verbatim.
pub fn interpolate(message: &str, values: &Values) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
