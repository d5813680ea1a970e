//! Menu configuration loading
//!
//! All menu data comes from JSON resources resolved through a [`FileSystem`]:
//!
//! - `scheme`: layout numbers, fonts, colors and resource names
//! - `menu_script`: the ordered button list
//! - `mod_info`: logo titles from the mod's game info
//! - `localization`: `#Token` replacement table
//!
//! Loaders return `Result<_, ConfigError>`. Their `load_or_default` variants
//! never fail: a missing or broken file degrades to defaults, because a
//! cosmetic misconfiguration must never take the host down.

pub mod error;
pub mod filesystem;
pub mod localization;
pub mod menu_script;
pub mod mod_info;
pub mod scheme;

pub use error::ConfigError;
pub use filesystem::{FileSystem, MemoryFileSystem, SearchPathFileSystem};
pub use localization::Localization;
pub use menu_script::{ButtonDescriptor, Family, MenuScript};
pub use mod_info::ModTitles;
pub use scheme::{FontSpec, ProportionalScale, Scheme};

use serde_json::{Map, Value};

/// Folder holding every menu resource
pub const RESOURCE_FOLDER: &str = "gamepadui/";

/// Resource paths the main menu reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPaths {
    pub scheme: String,
    pub legacy_button_scheme: String,
    pub menu_script: String,
    pub mod_info: String,
    pub localization: String,
}

impl Default for MenuPaths {
    fn default() -> Self {
        MenuPaths {
            scheme: format!("{}schememainmenu.json", RESOURCE_FOLDER),
            legacy_button_scheme: format!("{}schememainmenu_olduibutton.json", RESOURCE_FOLDER),
            menu_script: format!("{}mainmenu.json", RESOURCE_FOLDER),
            mod_info: "gameinfo.json".to_string(),
            localization: format!("{}gamepadui_english.json", RESOURCE_FOLDER),
        }
    }
}

/// Reads `path` and parses it as a top-level JSON object
pub(crate) fn read_json_object(
    fs: &dyn FileSystem,
    path: &str,
) -> Result<Map<String, Value>, ConfigError> {
    let text = fs.read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_json_object(&text, path)
}

pub(crate) fn parse_json_object(text: &str, path: &str) -> Result<Map<String, Value>, ConfigError> {
    let value: Value = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigError::NotAnObject {
            path: path.to_string(),
        }),
    }
}

/// Reads a scalar field as text (numbers and booleans become their JSON text)
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Logs a config error at debug level. Missing files are routine.
pub(crate) fn log_fallback(what: &str, error: &ConfigError) {
    if error.is_missing() {
        log::debug!("{} not found, using defaults", what);
    } else {
        log::debug!("{} unusable, using defaults: {}", what, error);
    }
}
