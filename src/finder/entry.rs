//! A single filesystem entry produced by the walker

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Filesystem entry handed to the filters and the action engine
///
/// Only the path is stored. The kind is queried from the filesystem each time
/// it is asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
}

impl Entry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the entry is a directory right now (follows symlinks)
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    /// Final path component, empty for a filesystem root
    pub fn base_name_os(&self) -> &OsStr {
        self.path.file_name().unwrap_or_default()
    }

    /// Lossy UTF-8 form of the base name, used for matching
    pub fn base_name(&self) -> Cow<'_, str> {
        self.base_name_os().to_string_lossy()
    }

    /// Parent directory, or the path itself when it has none
    pub fn dir_name(&self) -> &Path {
        self.path.parent().unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_entry_names() {
        let entry = Entry::new("/a/b/c.txt");
        assert_eq!(entry.base_name(), "c.txt");
        assert_eq!(entry.dir_name(), Path::new("/a/b"));
        assert_eq!(entry.path(), Path::new("/a/b/c.txt"));
    }

    #[cfg(unix)]
    #[test]
    fn test_entry_non_utf8_name() {
        use std::os::unix::ffi::OsStrExt;

        let entry = Entry::new(OsStr::from_bytes(b"/a/bad\xffname"));
        assert_eq!(entry.base_name_os().as_bytes(), b"bad\xffname");
        assert_eq!(entry.base_name(), "bad\u{FFFD}name");
    }

    #[test]
    fn test_entry_root() {
        let entry = Entry::new("/");
        assert_eq!(entry.base_name(), "");
        assert_eq!(entry.dir_name(), Path::new("/"));
    }

    #[test]
    fn test_entry_kind_is_live() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("thing");
        let entry = Entry::new(&path);

        File::create(&path)?;
        assert!(!entry.is_dir());

        std::fs::remove_file(&path)?;
        std::fs::create_dir(&path)?;
        assert!(entry.is_dir());

        Ok(())
    }
}
