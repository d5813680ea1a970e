//! Resource file lookup
//!
//! Menu resources are addressed by relative paths such as
//! `gamepadui/mainmenu.json`. A [`FileSystem`] turns those into text. The
//! disk implementation searches an ordered list of roots (mod directory first,
//! then base content) the way a game's mounted search paths work; the memory
//! implementation backs tests and embedded defaults.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only access to text resources by relative path
pub trait FileSystem {
    /// Reads a whole resource as UTF-8 text
    fn read_to_string(&self, path: &str) -> io::Result<String>;

    /// Returns true if the resource can be found
    fn exists(&self, path: &str) -> bool {
        self.read_to_string(path).is_ok()
    }
}

/// Disk file system with ordered search roots (first match wins)
#[derive(Debug, Clone, Default)]
pub struct SearchPathFileSystem {
    roots: Vec<PathBuf>,
}

impl SearchPathFileSystem {
    /// Creates a file system that searches `roots` in order
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        SearchPathFileSystem {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds `<data dir>/<app_name>` as the highest-precedence root
    ///
    /// Lets players override menu files without touching game content.
    /// Does nothing on platforms without a data directory.
    pub fn with_user_overrides(mut self, app_name: &str) -> Self {
        if let Some(dir) = dirs::data_dir() {
            self.roots.insert(0, dir.join(app_name));
        }
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Resolves a relative resource path to the first existing file
    pub fn resolve(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        self.roots
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
    }
}

impl FileSystem for SearchPathFileSystem {
    fn read_to_string(&self, path: &str) -> io::Result<String> {
        match self.resolve(path) {
            Some(full_path) => fs::read_to_string(full_path),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found in any search path", path),
            )),
        }
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }
}

/// In-memory file system keyed by exact relative path
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: HashMap<String, String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        MemoryFileSystem::default()
    }

    /// Adds or replaces a file
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }

    /// Builder form of [`MemoryFileSystem::insert`]
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn remove(&mut self, path: &str) -> Option<String> {
        self.files.remove(path)
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &str) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "gamepad_menu_fs_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn test_memory_file_system_lookup() {
        let fs = MemoryFileSystem::new().with_file("gameinfo.json", "{}");
        assert_eq!(fs.read_to_string("gameinfo.json").unwrap(), "{}");
        assert!(fs.exists("gameinfo.json"));

        let err = fs.read_to_string("missing.json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_search_path_first_root_wins() {
        let mod_dir = scratch_dir("mod");
        let base_dir = scratch_dir("base");
        fs::create_dir_all(mod_dir.join("gamepadui")).unwrap();
        fs::create_dir_all(base_dir.join("gamepadui")).unwrap();
        fs::write(mod_dir.join("gamepadui/mainmenu.json"), "mod").unwrap();
        fs::write(base_dir.join("gamepadui/mainmenu.json"), "base").unwrap();
        fs::write(base_dir.join("gameinfo.json"), "info").unwrap();

        let search = SearchPathFileSystem::new([mod_dir.clone(), base_dir.clone()]);
        assert_eq!(search.read_to_string("gamepadui/mainmenu.json").unwrap(), "mod");
        // Falls through to the base root when the mod does not override
        assert_eq!(search.read_to_string("gameinfo.json").unwrap(), "info");
        assert!(!search.exists("nope.json"));

        let _ = fs::remove_dir_all(mod_dir);
        let _ = fs::remove_dir_all(base_dir);
    }

    #[test]
    fn test_missing_everywhere_is_not_found() {
        let search = SearchPathFileSystem::new(Vec::<PathBuf>::new());
        let err = search.read_to_string("gamepadui/mainmenu.json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_shipped_assets_resolve() {
        let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
        let search = SearchPathFileSystem::new([assets]);
        assert!(search.exists("gamepadui/mainmenu.json"));
        assert!(search.exists("gamepadui/schememainmenu.json"));
        assert!(search.exists("gameinfo.json"));
    }
}
