use thiserror::Error;

/// Errors that can occur while reading menu configuration
///
/// None of these ever reach the player. The `load_or_default` helpers log
/// them at debug level and fall back to empty or default values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File missing or unreadable
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON (or not the expected shape)
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Top-level value is valid JSON but not an object
    #[error("{path}: expected an object at the top level")]
    NotAnObject { path: String },
}

impl ConfigError {
    /// True when the error only means "file not there"
    pub fn is_missing(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}
