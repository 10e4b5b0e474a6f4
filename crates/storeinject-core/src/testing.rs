use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::FileSystem;

/// In-memory filesystem with per-directory write protection.
#[derive(Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    read_only: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        {
            let mut dirs = self.dirs.borrow_mut();
            for ancestor in path.ancestors() {
                dirs.insert(ancestor.to_path_buf());
            }
        }
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, contents: &str) -> Self {
        let path = path.into();
        let this = match path.parent() {
            Some(parent) => self.with_dir(parent),
            None => self,
        };
        this.files.borrow_mut().insert(path, contents.to_string());
        this
    }

    /// Nothing may be created directly inside `path`.
    pub fn with_read_only(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self = self.with_dir(path.clone());
        self.read_only.insert(path);
        self
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if self.read_only.contains(parent) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only directory",
            )),
            _ => Ok(()),
        }
    }
}

impl FileSystem for MemoryFs {
    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.file(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let parent_exists = path.parent().is_some_and(|parent| self.is_dir(parent));
        if !parent_exists {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no parent directory"));
        }
        self.check_writable(path)?;
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let missing: Vec<PathBuf> = path
            .ancestors()
            .take_while(|ancestor| !self.is_dir(ancestor))
            .map(Path::to_path_buf)
            .collect();

        for dir in missing.into_iter().rev() {
            self.check_writable(&dir)?;
            self.dirs.borrow_mut().insert(dir);
        }
        Ok(())
    }
}
