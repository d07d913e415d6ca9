//! Ordered path to content mapping for multi-file outputs.

use std::{fs, io, path::Path};

use tracing::debug;

/// Content of entries that stand in for binary assets.
pub const PLACEHOLDER: &str = "PLACEHOLDER";

/// Ordered set of generated files, keyed by relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteFileMap {
    entries: Vec<(String, String)>,
}

impl SiteFileMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file. An existing path keeps its position and gets the new
    /// content.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        let content = content.into();
        match self.entries.iter_mut().find(|(p, _)| *p == path) {
            Some(entry) => entry.1 = content,
            None => self.entries.push((path, content)),
        }
    }

    /// Content of the file at `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, c)| c.as_str())
    }

    /// Paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    /// `(path, content)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every file under `dir`, creating parent directories.
    ///
    /// Placeholder entries are skipped. Returns the number of files written.
    pub fn write_to(&self, dir: &Path) -> io::Result<usize> {
        let mut written = 0;
        for (path, content) in self.iter() {
            if content == PLACEHOLDER {
                debug!(path, "skipping placeholder");
                continue;
            }
            let target = dir.join(path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, content)?;
            debug!(path = %target.display(), "wrote file");
            written += 1;
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut map = SiteFileMap::new();
        map.insert("b.txt", "1");
        map.insert("a.txt", "2");
        map.insert("b.txt", "3");

        assert_eq!(map.len(), 2);
        assert_eq!(map.paths().collect::<Vec<_>>(), ["b.txt", "a.txt"]);
        assert_eq!(map.get("b.txt"), Some("3"));
        assert_eq!(map.get("c.txt"), None);
    }

    #[test]
    fn test_write_to_skips_placeholders() {
        let dir = TempDir::new().unwrap();
        let mut map = SiteFileMap::new();
        map.insert("style.css", "body {}");
        map.insert("screenshot.png", PLACEHOLDER);
        map.insert("assets/js/script.js", "// js");

        let written = map.write_to(dir.path()).unwrap();

        assert_eq!(written, 2);
        assert!(dir.path().join("style.css").exists());
        assert!(!dir.path().join("screenshot.png").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("assets/js/script.js")).unwrap(),
            "// js"
        );
    }
}
