//! Scheme files: fonts, colors, resource names and layout numbers
//!
//! ```json
//! {
//!     "resources":  { "Logo.Image": "" },
//!     "fonts":      { "Logo.Font": { "tall": 42 } },
//!     "colors":     { "Logo": "255 255 255 255" },
//!     "properties": { "Buttons.OffsetX": 52, "Buttons.Space": "2" }
//! }
//! ```
//!
//! Every lookup takes a default, so a sparse or missing scheme still yields a
//! usable menu. Numeric properties and fonts are authored for a 480-line
//! screen and scaled with [`ProportionalScale`].

use super::{ConfigError, FileSystem, log_fallback, scalar_text};
use crate::paint::Rgba;
use crate::text::BitmapFont;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Scheme values are clamped to this many pixels either way after scaling
pub const MAX_SCHEME_PIXELS: i32 = 16384;

/// Font entry in a scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSpec {
    /// Line height in scheme units
    pub tall: i32,
    /// Scale `tall` with the screen height
    pub proportional: bool,
}

impl Default for FontSpec {
    fn default() -> Self {
        FontSpec {
            tall: 7,
            proportional: true,
        }
    }
}

impl FontSpec {
    /// Reads `{ "tall": 42, "proportional": false }`. `tall` may be a number or
    /// a numeric string; anything unreadable gives `None`.
    fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let tall = number(entry.get("tall")?)?;
        let proportional = match entry.get("proportional") {
            None => true,
            Some(Value::Bool(flag)) => *flag,
            Some(other) => number(other)? != 0.0,
        };
        Some(FontSpec {
            tall: clamp_pixels(tall),
            proportional,
        })
    }
}

/// A JSON number or a numeric string
fn number(value: &Value) -> Option<f32> {
    let parsed = match value {
        Value::Number(number) => number.as_f64()? as f32,
        Value::String(text) => text.trim().parse().ok()?,
        _ => return None,
    };
    parsed.is_finite().then_some(parsed)
}

fn clamp_pixels(value: f32) -> i32 {
    let limit = MAX_SCHEME_PIXELS as f32;
    value.round().clamp(-limit, limit) as i32
}

/// Converts 480-line scheme units into pixels for the current screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionalScale {
    factor: f32,
}

impl ProportionalScale {
    /// Screen height scheme values are authored against
    pub const BASE_TALL: f32 = 480.0;

    /// No scaling; used until the panel knows its parent size
    pub fn identity() -> Self {
        ProportionalScale { factor: 1.0 }
    }

    pub fn for_screen_tall(tall: i32) -> Self {
        if tall <= 0 {
            return ProportionalScale::identity();
        }
        ProportionalScale {
            factor: tall as f32 / Self::BASE_TALL,
        }
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Scales a scheme value and rounds to whole pixels, within
    /// [`MAX_SCHEME_PIXELS`]
    pub fn apply(&self, value: f32) -> i32 {
        clamp_pixels(value * self.factor)
    }
}

impl Default for ProportionalScale {
    fn default() -> Self {
        ProportionalScale::identity()
    }
}

/// Top-level sections as they appear on disk
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SchemeFile {
    resources: Value,
    fonts: Value,
    colors: Value,
    properties: Value,
}

/// A parsed scheme file
///
/// Entries that cannot be read are dropped one by one, so lookups for them
/// fall back to their defaults while the rest of the file still applies.
#[derive(Debug, Clone, Default)]
pub struct Scheme {
    resources: HashMap<String, String>,
    fonts: HashMap<String, FontSpec>,
    colors: HashMap<String, Rgba>,
    properties: HashMap<String, f32>,
}

/// Converts every entry of `section` with `read`, skipping the ones it rejects
fn read_section<T>(
    path: &str,
    name: &str,
    section: &Value,
    read: impl Fn(&Value) -> Option<T>,
) -> HashMap<String, T> {
    let entries = match section {
        Value::Null => return HashMap::new(),
        Value::Object(entries) => entries,
        _ => {
            log::debug!("{}: \"{}\" is not an object, ignoring it", path, name);
            return HashMap::new();
        }
    };

    let mut out = HashMap::with_capacity(entries.len());
    for (key, value) in entries {
        match read(value) {
            Some(parsed) => {
                out.insert(key.clone(), parsed);
            }
            None => log::debug!("{}: skipping unreadable {} entry {:?}", path, name, key),
        }
    }
    out
}

impl Scheme {
    pub fn parse(text: &str, path: &str) -> Result<Self, ConfigError> {
        let file: SchemeFile = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;

        Ok(Scheme {
            resources: read_section(path, "resources", &file.resources, scalar_text),
            fonts: read_section(path, "fonts", &file.fonts, FontSpec::from_value),
            colors: read_section(path, "colors", &file.colors, |value| {
                scalar_text(value).and_then(|text| Rgba::parse(&text))
            }),
            properties: read_section(path, "properties", &file.properties, number),
        })
    }

    pub fn load(fs: &dyn FileSystem, path: &str) -> Result<Self, ConfigError> {
        let text = fs.read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Scheme::parse(&text, path)
    }

    /// Loads a scheme, falling back to an empty one
    pub fn load_or_default(fs: &dyn FileSystem, path: &str) -> Self {
        Scheme::load(fs, path).unwrap_or_else(|err| {
            log_fallback(path, &err);
            Scheme::default()
        })
    }

    /// Named resource string, or `""` when absent
    pub fn resource_string(&self, name: &str) -> &str {
        self.resources.get(name).map(String::as_str).unwrap_or("")
    }

    /// Font for `name` at the current scale
    pub fn font(&self, name: &str, default_tall: i32, scale: ProportionalScale) -> BitmapFont {
        let spec = self.fonts.get(name).copied().unwrap_or(FontSpec {
            tall: default_tall,
            ..FontSpec::default()
        });
        let tall = if spec.proportional {
            scale.apply(spec.tall as f32)
        } else {
            spec.tall
        };
        BitmapFont::from_tall(tall)
    }

    /// Color for `name`, or `default` when absent
    pub fn color(&self, name: &str, default: Rgba) -> Rgba {
        self.colors.get(name).copied().unwrap_or(default)
    }

    /// Raw numeric property. Accepts JSON numbers and numeric strings.
    pub fn property(&self, name: &str, default: f32) -> f32 {
        self.properties.get(name).copied().unwrap_or(default)
    }

    /// Numeric property converted to pixels
    pub fn scaled_property(&self, name: &str, default: f32, scale: ProportionalScale) -> i32 {
        scale.apply(self.property(name, default))
    }
}
