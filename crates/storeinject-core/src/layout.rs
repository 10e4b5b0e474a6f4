use std::path::{Path, PathBuf};

use storeinject_constants::{STORE_MODULE, STORE_SUBDIR};
use storeinject_utils::get_scoped_package_path;

/// Root directory of `package_name` inside `node_modules`.
pub fn package_dir(node_modules: &Path, package_name: &str) -> PathBuf {
    get_scoped_package_path(node_modules, package_name)
}

/// Directory the bundled store files are installed into.
pub fn store_target_dir(node_modules: &Path, package_name: &str) -> PathBuf {
    STORE_SUBDIR
        .iter()
        .fold(package_dir(node_modules, package_name), |dir, part| {
            dir.join(part)
        })
}

/// Installed store module, without extension, as `require` would resolve it.
pub fn store_module_path(package_dir: &Path) -> PathBuf {
    STORE_SUBDIR
        .iter()
        .fold(package_dir.to_path_buf(), |dir, part| dir.join(part))
        .join(STORE_MODULE)
}

/// Where a package build may place its public entry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLayout {
    Lib,
    Root,
    Dist,
}

impl EntryLayout {
    /// Probe order.
    pub const ALL: [Self; 3] = [Self::Lib, Self::Root, Self::Dist];

    #[must_use]
    pub fn entry_path(self, package_dir: &Path) -> PathBuf {
        match self {
            Self::Lib => package_dir.join("lib").join("index.js"),
            Self::Root => package_dir.join("index.js"),
            Self::Dist => package_dir.join("dist").join("index.js"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NM: &str = "/app/node_modules";

    #[test]
    fn test_store_target_dir() {
        assert_eq!(
            store_target_dir(Path::new(NM), "@adiwajshing/baileys"),
            PathBuf::from("/app/node_modules/@adiwajshing/baileys/lib/Store")
        );
    }

    #[test]
    fn test_store_module_path() {
        let pkg = package_dir(Path::new(NM), "@adiwajshing/baileys");
        assert_eq!(
            store_module_path(&pkg),
            PathBuf::from("/app/node_modules/@adiwajshing/baileys/lib/Store/make-in-memory-store")
        );
    }

    #[test]
    fn test_entry_layouts_in_probe_order() {
        let pkg = Path::new("/app/node_modules/@adiwajshing/baileys");
        let paths: Vec<PathBuf> = EntryLayout::ALL
            .iter()
            .map(|layout| layout.entry_path(pkg))
            .collect();

        assert_eq!(
            paths,
            vec![
                pkg.join("lib/index.js"),
                pkg.join("index.js"),
                pkg.join("dist/index.js"),
            ]
        );
    }
}
