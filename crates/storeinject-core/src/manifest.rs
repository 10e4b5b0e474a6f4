use serde::Deserialize;
use std::path::{Path, PathBuf};

use storeinject_constants::PACKAGE_JSON;

use crate::fs::FileSystem;

/// The few `package.json` fields the patcher cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub main: Option<String>,
}

impl PackageManifest {
    /// Reads `<package_dir>/package.json`; a missing or malformed file yields `None`.
    pub fn read(fs: &dyn FileSystem, package_dir: &Path) -> Option<Self> {
        let content = fs.read_to_string(&package_dir.join(PACKAGE_JSON)).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Entry file named by `main`, with node's implicit `.js` / `index.js`.
    pub fn main_entry(&self, fs: &dyn FileSystem, package_dir: &Path) -> Option<PathBuf> {
        let main = self.main.as_deref()?.trim();
        if main.is_empty() {
            return None;
        }

        let path = package_dir.join(main);
        if fs.is_dir(&path) {
            return Some(path.join("index.js"));
        }
        if path.extension().is_some() {
            return Some(path);
        }

        let mut with_ext = path.into_os_string();
        with_ext.push(".js");
        Some(PathBuf::from(with_ext))
    }
}
