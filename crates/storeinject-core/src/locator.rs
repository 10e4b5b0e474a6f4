use std::path::{Path, PathBuf};

use storeinject_error::{InjectError, Result};
use storeinject_utils::get_node_modules_path;

use crate::fs::FileSystem;

/// Finds the nearest `node_modules` directory at or above `start`.
///
/// Only existence checks are made; the filesystem root itself is searched too.
pub fn find_node_modules(fs: &dyn FileSystem, start: &Path) -> Result<PathBuf> {
    start
        .ancestors()
        .map(get_node_modules_path)
        .find(|candidate| fs.is_dir(candidate))
        .ok_or_else(|| InjectError::NodeModulesNotFound(start.display().to_string()))
}
