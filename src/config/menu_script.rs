//! Menu script: the data-driven button list
//!
//! The script is a JSON object whose keys are button names, kept in file
//! order:
//!
//! ```json
//! {
//!     "ResumeGame": {
//!         "command": "cmd gamemenucommand resumegame",
//!         "text": "#GameUI_GameMenu_ResumeGame",
//!         "priority": "10",
//!         "family": "ingame"
//!     },
//!     "Quit": { "command": "cmd gamemenucommand quit", "text": "#GameUI_GameMenu_Quit" }
//! }
//! ```
//!
//! Every field is optional. Entries that are not objects are skipped.

use super::{ConfigError, FileSystem, log_fallback, parse_json_object, scalar_text};
use crate::context::MenuContext;
use serde_json::{Map, Value};

/// Label used when an entry has no `text`
pub const DEFAULT_TEXT: &str = "Sample Text";

/// Priority used when an entry has no usable `priority`
pub const DEFAULT_PRIORITY: i32 = 1;

/// Which menu context(s) list a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Family {
    /// Both the main menu and the in-game menu
    #[default]
    All,
    /// Main menu only
    MainMenu,
    /// In-game menu only (any family name other than `all`/`mainmenu`)
    InGame,
}

impl Family {
    /// Case-insensitive match; unknown names mean in-game only
    pub fn parse(text: &str) -> Self {
        if text.eq_ignore_ascii_case("all") {
            Family::All
        } else if text.eq_ignore_ascii_case("mainmenu") {
            Family::MainMenu
        } else {
            Family::InGame
        }
    }

    /// Returns true if buttons of this family belong in `context`
    pub fn includes(self, context: MenuContext) -> bool {
        match self {
            Family::All => true,
            Family::MainMenu => context == MenuContext::MainMenu,
            Family::InGame => context == MenuContext::InGame,
        }
    }
}

/// One button entry from the menu script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDescriptor {
    pub name: String,
    pub command: String,
    pub text: String,
    pub description: String,
    pub priority: i32,
    pub family: Family,
    /// Position among the accepted entries, used to keep equal priorities
    /// in file order
    pub sequence: usize,
}

impl ButtonDescriptor {
    /// Builds a descriptor from a script entry, defaulting missing fields
    pub fn from_entry(name: &str, entry: &Map<String, Value>, sequence: usize) -> Self {
        let field = |key: &str| entry.get(key).and_then(scalar_text);

        ButtonDescriptor {
            name: name.to_string(),
            command: field("command").unwrap_or_default(),
            text: field("text").unwrap_or_else(|| DEFAULT_TEXT.to_string()),
            description: field("description").unwrap_or_default(),
            priority: parse_priority(field("priority").as_deref()),
            family: field("family")
                .map(|family| Family::parse(&family))
                .unwrap_or_default(),
            sequence,
        }
    }
}

/// Parses priority text; absent or malformed text yields [`DEFAULT_PRIORITY`]
pub fn parse_priority(text: Option<&str>) -> i32 {
    text.and_then(|text| text.trim().parse::<i32>().ok())
        .unwrap_or(DEFAULT_PRIORITY)
}

/// The parsed button list, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuScript {
    pub buttons: Vec<ButtonDescriptor>,
}

impl MenuScript {
    pub fn parse(text: &str, path: &str) -> Result<Self, ConfigError> {
        let root = parse_json_object(text, path)?;
        Ok(MenuScript::from_map(&root))
    }

    pub fn load(fs: &dyn FileSystem, path: &str) -> Result<Self, ConfigError> {
        let text = fs.read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        MenuScript::parse(&text, path)
    }

    /// Loads the script, falling back to an empty button list
    pub fn load_or_default(fs: &dyn FileSystem, path: &str) -> Self {
        MenuScript::load(fs, path).unwrap_or_else(|err| {
            log_fallback(path, &err);
            MenuScript::default()
        })
    }

    fn from_map(root: &Map<String, Value>) -> Self {
        let buttons = root
            .iter()
            .filter_map(|(name, value)| match value {
                Value::Object(entry) => Some((name, entry)),
                _ => {
                    log::debug!("skipping menu entry {:?}: not an object", name);
                    None
                }
            })
            .enumerate()
            .map(|(sequence, (name, entry))| ButtonDescriptor::from_entry(name, entry, sequence))
            .collect();

        MenuScript { buttons }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryFileSystem;

    #[test]
    fn test_family_matching_is_case_insensitive() {
        assert_eq!(Family::parse("ALL"), Family::All);
        assert_eq!(Family::parse("MainMenu"), Family::MainMenu);
        assert_eq!(Family::parse("ingame"), Family::InGame);
        assert_eq!(Family::parse("whatever"), Family::InGame);
        assert_eq!(Family::parse(""), Family::InGame);
    }

    #[test]
    fn test_family_partition() {
        assert!(Family::All.includes(MenuContext::MainMenu));
        assert!(Family::All.includes(MenuContext::InGame));
        assert!(Family::MainMenu.includes(MenuContext::MainMenu));
        assert!(!Family::MainMenu.includes(MenuContext::InGame));
        assert!(Family::InGame.includes(MenuContext::InGame));
        assert!(!Family::InGame.includes(MenuContext::MainMenu));
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!(parse_priority(Some("10")), 10);
        assert_eq!(parse_priority(Some(" -3 ")), -3);
        assert_eq!(parse_priority(Some("high")), DEFAULT_PRIORITY);
        assert_eq!(parse_priority(Some("")), DEFAULT_PRIORITY);
        assert_eq!(parse_priority(None), DEFAULT_PRIORITY);
    }

    #[test]
    fn test_entries_keep_file_order_and_defaults() {
        let script = MenuScript::parse(
            r#"{
                "Zeta": { "command": "cmd map test", "priority": 5 },
                "Skipped": "not an object",
                "Alpha": { "text": "Options", "family": "mainmenu", "priority": "oops" }
            }"#,
            "mainmenu.json",
        )
        .unwrap();

        let names: Vec<&str> = script.buttons.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);

        let zeta = &script.buttons[0];
        assert_eq!(zeta.command, "cmd map test");
        assert_eq!(zeta.text, DEFAULT_TEXT);
        assert_eq!(zeta.description, "");
        assert_eq!(zeta.priority, 5);
        assert_eq!(zeta.family, Family::All);
        assert_eq!(zeta.sequence, 0);

        let alpha = &script.buttons[1];
        assert_eq!(alpha.text, "Options");
        assert_eq!(alpha.priority, DEFAULT_PRIORITY);
        assert_eq!(alpha.family, Family::MainMenu);
        assert_eq!(alpha.sequence, 1);
    }

    #[test]
    fn test_missing_script_is_empty() {
        let fs = MemoryFileSystem::new().with_file("broken.json", "][");
        assert!(MenuScript::load_or_default(&fs, "gamepadui/mainmenu.json").buttons.is_empty());
        assert!(MenuScript::load_or_default(&fs, "broken.json").buttons.is_empty());
    }
}
