//! `#Token` localization
//!
//! Display strings that start with `#` are looked up in a token table:
//!
//! ```json
//! { "lang": { "Language": "English", "Tokens": { "GameUI_Console": "Console" } } }
//! ```
//!
//! A bare `{ "Tokens": { ... } }` object works too. Token names are matched
//! case-insensitively. Unknown tokens are shown verbatim.

use super::{ConfigError, FileSystem, log_fallback, read_json_object, scalar_text};
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct Localization {
    tokens: HashMap<String, String>,
}

impl Localization {
    pub fn new() -> Self {
        Localization::default()
    }

    pub fn load(fs: &dyn FileSystem, path: &str) -> Result<Self, ConfigError> {
        let root = read_json_object(fs, path)?;
        let section = match root.get("lang") {
            Some(Value::Object(lang)) => lang,
            _ => &root,
        };

        let mut localization = Localization::new();
        if let Some(Value::Object(tokens)) = section.get("Tokens") {
            localization.extend_from(tokens);
        }
        Ok(localization)
    }

    /// Loads a token table, falling back to an empty one
    pub fn load_or_default(fs: &dyn FileSystem, path: &str) -> Self {
        Localization::load(fs, path).unwrap_or_else(|err| {
            log_fallback(path, &err);
            Localization::default()
        })
    }

    fn extend_from(&mut self, tokens: &Map<String, Value>) {
        for (name, value) in tokens {
            if let Some(text) = scalar_text(value) {
                self.insert(name, text);
            }
        }
    }

    pub fn insert(&mut self, token: &str, text: impl Into<String>) {
        self.tokens.insert(token.to_ascii_lowercase(), text.into());
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Resolves `#Token` strings; everything else is returned unchanged
    pub fn localize(&self, text: &str) -> String {
        text.strip_prefix('#')
            .and_then(|token| self.tokens.get(&token.to_ascii_lowercase()))
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryFileSystem;

    #[test]
    fn test_tokens_resolve_case_insensitively() {
        let fs = MemoryFileSystem::new().with_file(
            "lang.json",
            r#"{ "lang": { "Language": "English", "Tokens": { "GameUI_Console": "Console" } } }"#,
        );
        let localization = Localization::load_or_default(&fs, "lang.json");
        assert_eq!(localization.len(), 1);
        assert_eq!(localization.localize("#gameui_console"), "Console");
        assert_eq!(localization.localize("#GameUI_Console"), "Console");
    }

    #[test]
    fn test_plain_and_unknown_text_pass_through() {
        let mut localization = Localization::new();
        localization.insert("GameUI_Quit", "Quit");
        assert_eq!(localization.localize("New Game"), "New Game");
        assert_eq!(localization.localize("#GameUI_Missing"), "#GameUI_Missing");
        assert_eq!(localization.localize("GameUI_Quit"), "GameUI_Quit");
    }

    #[test]
    fn test_bare_tokens_object() {
        let fs = MemoryFileSystem::new()
            .with_file("lang.json", r#"{ "Tokens": { "A": "Alpha", "B": 2 } }"#);
        let localization = Localization::load_or_default(&fs, "lang.json");
        assert_eq!(localization.localize("#a"), "Alpha");
        assert_eq!(localization.localize("#b"), "2");
    }

    #[test]
    fn test_missing_table_is_empty() {
        assert!(Localization::load_or_default(&MemoryFileSystem::new(), "lang.json").is_empty());
    }
}
