//! Logo titles from the mod's game info
//!
//! Reads `gameinfo.json`. The values may sit at the top level or inside a
//! `"GameInfo"` object. Gamepad-specific keys win over the generic ones.

use super::{ConfigError, FileSystem, log_fallback, read_json_object, scalar_text};
use serde_json::{Map, Value};

/// The two logo text lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModTitles {
    pub title: String,
    pub subtitle: String,
}

impl ModTitles {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        ModTitles {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    pub fn load(fs: &dyn FileSystem, path: &str) -> Result<Self, ConfigError> {
        let root = read_json_object(fs, path)?;
        let info = match root.get("GameInfo") {
            Some(Value::Object(info)) => info,
            _ => &root,
        };
        Ok(ModTitles::from_map(info))
    }

    /// Loads titles, falling back to empty strings
    pub fn load_or_default(fs: &dyn FileSystem, path: &str) -> Self {
        ModTitles::load(fs, path).unwrap_or_else(|err| {
            log_fallback(path, &err);
            ModTitles::default()
        })
    }

    fn from_map(info: &Map<String, Value>) -> Self {
        // The first key present wins, even if its value is empty
        let first_of = |keys: [&str; 2]| {
            keys.iter()
                .find_map(|key| info.get(*key).and_then(scalar_text))
                .unwrap_or_default()
        };

        ModTitles {
            title: first_of(["gamepadui_title", "title"]),
            subtitle: first_of(["gamepadui_title2", "title2"]),
        }
    }

    /// Both lines, top first
    pub fn lines(&self) -> [&str; 2] {
        [&self.title, &self.subtitle]
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.subtitle.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryFileSystem;

    #[test]
    fn test_gamepad_titles_take_precedence() {
        let fs = MemoryFileSystem::new().with_file(
            "gameinfo.json",
            r#"{ "title": "HALF-LIFE'", "gamepadui_title": "HALF-LIFE 2", "title2": "EPISODE" }"#,
        );
        let titles = ModTitles::load_or_default(&fs, "gameinfo.json");
        assert_eq!(titles.title, "HALF-LIFE 2");
        assert_eq!(titles.subtitle, "EPISODE");
    }

    #[test]
    fn test_present_but_empty_key_still_wins() {
        let fs = MemoryFileSystem::new().with_file(
            "gameinfo.json",
            r#"{ "GameInfo": { "gamepadui_title": "", "title": "Fallback" } }"#,
        );
        let titles = ModTitles::load_or_default(&fs, "gameinfo.json");
        assert_eq!(titles.title, "");
        assert_eq!(titles.subtitle, "");
    }

    #[test]
    fn test_nested_game_info_block() {
        let fs = MemoryFileSystem::new()
            .with_file("gameinfo.json", r#"{ "GameInfo": { "title": "MOD" } }"#);
        assert_eq!(
            ModTitles::load_or_default(&fs, "gameinfo.json"),
            ModTitles::new("MOD", "")
        );
    }

    #[test]
    fn test_missing_file_gives_empty_titles() {
        let titles = ModTitles::load_or_default(&MemoryFileSystem::new(), "gameinfo.json");
        assert!(titles.is_empty());
        assert_eq!(titles.lines(), ["", ""]);
    }
}
