use std::path::{Path, PathBuf};

use storeinject_error::{InjectError, Result};
use storeinject_logger;

use crate::fs::FileSystem;
use crate::transform::SourceFile;

pub struct FileInstaller<'a> {
    fs: &'a dyn FileSystem,
    source_dir: &'a Path,
    debug: bool,
}

impl<'a> FileInstaller<'a> {
    pub fn new(fs: &'a dyn FileSystem, source_dir: &'a Path, debug: bool) -> Self {
        Self {
            fs,
            source_dir,
            debug,
        }
    }

    /// Copies `files` into `target_dir` through the content transformer.
    ///
    /// Targets are always overwritten. A failure on one file aborts the rest;
    /// files already written stay in place.
    pub fn install(&self, target_dir: &Path, files: &[String]) -> Result<Vec<PathBuf>> {
        let mut installed = Vec::with_capacity(files.len());

        for file_name in files {
            installed.push(self.install_file(target_dir, file_name)?);
        }

        Ok(installed)
    }

    fn install_file(&self, target_dir: &Path, file_name: &str) -> Result<PathBuf> {
        self.fs
            .create_dir_all(target_dir)
            .map_err(|e| InjectError::io("create directory", target_dir, &e))?;

        storeinject_logger::status(&format!("Copying {file_name}..."));

        let source = SourceFile::load(self.fs, self.source_dir, file_name)?;
        storeinject_logger::debug(
            &format!("Read {} ({} bytes)", source.origin.display(), source.raw.len()),
            self.debug,
        );

        let content = source.transform();
        let target_file = target_dir.join(file_name);
        self.fs
            .write(&target_file, &content)
            .map_err(|e| InjectError::io("write", &target_file, &e))?;

        storeinject_logger::success(&format!(
            "{file_name} copied to: {}",
            target_file.display()
        ));

        Ok(target_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::OsFileSystem;
    use crate::testing::MemoryFs;
    use std::fs;

    fn store_files() -> Vec<String> {
        storeinject_constants::STORE_FILES
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn write_sources(dir: &Path) {
        fs::write(
            dir.join("make-in-memory-store.js"),
            "const d = require('./make-ordered-dictionary');\nconst t = require('../../Types');\nexports.default = 1;\n",
        )
        .unwrap();
        fs::write(
            dir.join("make-ordered-dictionary.js"),
            "exports.default = function () {};\n",
        )
        .unwrap();
        fs::write(
            dir.join("object-repository.js"),
            "const g = require('../../Utils/generics');\n",
        )
        .unwrap();
    }

    #[test]
    fn test_installs_all_files_with_rewritten_requires() {
        let temp = tempfile::tempdir().unwrap();
        let source_dir = temp.path().join("tool");
        fs::create_dir(&source_dir).unwrap();
        write_sources(&source_dir);
        let target = temp.path().join("node_modules/@adiwajshing/baileys/lib/Store");

        let installer = FileInstaller::new(&OsFileSystem, &source_dir, false);
        let installed = installer.install(&target, &store_files()).unwrap();

        assert_eq!(installed.len(), 3);
        assert!(installed.iter().all(|path| path.is_file()));

        let repo = fs::read_to_string(target.join("object-repository.js")).unwrap();
        assert_eq!(repo, "const g = require(\"../Utils/generics\");\n");

        let store = fs::read_to_string(target.join("make-in-memory-store.js")).unwrap();
        assert!(store.contains("require(\"./make-ordered-dictionary\")"));
        assert!(store.contains("require(\"../Types\")"));
    }

    #[test]
    fn test_rerun_keeps_single_compat_export() {
        let temp = tempfile::tempdir().unwrap();
        write_sources(temp.path());
        let target = temp.path().join("out/lib/Store");
        let installer = FileInstaller::new(&OsFileSystem, temp.path(), false);

        installer.install(&target, &store_files()).unwrap();
        let first = fs::read_to_string(target.join("make-in-memory-store.js")).unwrap();
        installer.install(&target, &store_files()).unwrap();
        let second = fs::read_to_string(target.join("make-in-memory-store.js")).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            second
                .matches("exports.makeInMemoryStore = exports.default;")
                .count(),
            1
        );
    }

    #[test]
    fn test_missing_source_keeps_earlier_files() {
        let fs = MemoryFs::new()
            .with_file("/tool/make-in-memory-store.js", "exports.default = 1;\n")
            .with_file("/tool/make-ordered-dictionary.js", "")
            .with_dir("/app/node_modules");
        let target = Path::new("/app/node_modules/@adiwajshing/baileys/lib/Store");

        let installer = FileInstaller::new(&fs, Path::new("/tool"), false);
        let err = installer.install(target, &store_files()).unwrap_err();

        assert!(matches!(err, InjectError::SourceMissing(_)));
        assert!(fs.file(&target.join("make-in-memory-store.js")).is_some());
        assert!(fs.file(&target.join("make-ordered-dictionary.js")).is_some());
        assert!(fs.file(&target.join("object-repository.js")).is_none());
    }

    #[test]
    fn test_read_only_container_is_io_error() {
        let fs = MemoryFs::new()
            .with_file("/tool/make-in-memory-store.js", "")
            .with_read_only("/app/node_modules");
        let target = Path::new("/app/node_modules/@adiwajshing/baileys/lib/Store");

        let installer = FileInstaller::new(&fs, Path::new("/tool"), false);
        let err = installer.install(target, &store_files()).unwrap_err();

        assert!(matches!(err, InjectError::IoError(ref msg) if msg.contains("permission denied")));
    }
}
