//! In-memory system implementation for tests

use super::System;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Test implementation of the System trait backed by in-memory storage
///
/// Seed state with the `with_file`/`with_dir` builders; parent directories
/// are created implicitly. Writes are lenient about parents for the same
/// reason: the mock models content, not permission semantics.
#[derive(Debug, Default)]
pub struct MockSystem {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
}

impl MockSystem {
    /// Create an empty mock filesystem
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories implicitly
    ///
    /// # Errors
    ///
    /// Infallible for the in-memory store; kept fallible to mirror the
    /// builder signatures used by real-filesystem seeding helpers.
    pub fn with_file(self, path: &str, contents: &[u8]) -> io::Result<Self> {
        let path = PathBuf::from(path);
        self.insert_ancestors(&path);
        self.files
            .lock()
            .expect("mock lock")
            .insert(path, contents.to_vec());
        Ok(self)
    }

    /// Seed a directory and its ancestors
    ///
    /// # Errors
    ///
    /// Infallible for the in-memory store.
    pub fn with_dir(self, path: &str) -> io::Result<Self> {
        let path = PathBuf::from(path);
        self.insert_ancestors(&path);
        self.dirs.lock().expect("mock lock").insert(path);
        Ok(self)
    }

    fn insert_ancestors(&self, path: &Path) {
        let mut dirs = self.dirs.lock().expect("mock lock");
        let mut current = path.parent();
        while let Some(parent) = current {
            if !parent.as_os_str().is_empty() {
                dirs.insert(parent.to_path_buf());
            }
            current = parent.parent();
        }
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("No such file or directory: {}", path.display()),
        )
    }
}

impl System for MockSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let files = self.files.lock().expect("mock lock");
        let contents = files.get(path).ok_or_else(|| Self::not_found(path))?;

        String::from_utf8(contents.clone()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            )
        })
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.insert_ancestors(path);
        self.files
            .lock()
            .expect("mock lock")
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.insert_ancestors(path);
        self.dirs
            .lock()
            .expect("mock lock")
            .insert(path.to_path_buf());
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut dirs = self.dirs.lock().expect("mock lock");
        if !dirs.contains(path) {
            return Err(Self::not_found(path));
        }

        dirs.retain(|dir| !dir.starts_with(path));
        self.files
            .lock()
            .expect("mock lock")
            .retain(|file, _| !file.starts_with(path));
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.files
            .lock()
            .expect("mock lock")
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| Self::not_found(path))
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().expect("mock lock").contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().expect("mock lock").contains(path)
    }
}
