use std::path::{Path, PathBuf};

use storeinject_constants::EXPORT_SYMBOL;
use storeinject_error::{InjectError, Result};
use storeinject_logger;
use storeinject_utils::relative_module_path;

use crate::entry::{EntryDocument, InjectedBlock, append_block};
use crate::fs::FileSystem;
use crate::layout::{EntryLayout, store_module_path};
use crate::manifest::PackageManifest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStatus {
    Added,
    AlreadyExported,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub entry: PathBuf,
    pub status: PatchStatus,
    /// Blocks from earlier runs that were stripped before patching.
    pub replaced_blocks: usize,
}

pub struct EntryPatcher<'a> {
    fs: &'a dyn FileSystem,
    debug: bool,
}

impl<'a> EntryPatcher<'a> {
    pub fn new(fs: &'a dyn FileSystem, debug: bool) -> Self {
        Self { fs, debug }
    }

    /// Fixed layouts first, then the manifest's `main` if it names another file.
    pub fn candidates(
        &self,
        package_dir: &Path,
        manifest: Option<&PackageManifest>,
    ) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = EntryLayout::ALL
            .iter()
            .map(|layout| layout.entry_path(package_dir))
            .collect();

        if let Some(main) = manifest.and_then(|m| m.main_entry(self.fs, package_dir)) {
            if !candidates.contains(&main) {
                candidates.push(main);
            }
        }

        candidates
    }

    pub fn locate_entry(
        &self,
        package_dir: &Path,
        manifest: Option<&PackageManifest>,
    ) -> Result<PathBuf> {
        self.candidates(package_dir, manifest)
            .into_iter()
            .find(|candidate| {
                let found = self.fs.is_file(candidate);
                storeinject_logger::debug(
                    &format!(
                        "Entry candidate {}: {}",
                        candidate.display(),
                        if found { "found" } else { "missing" }
                    ),
                    self.debug,
                );
                found
            })
            .ok_or_else(|| InjectError::EntryNotFound(package_dir.display().to_string()))
    }

    pub fn patch(
        &self,
        package_dir: &Path,
        manifest: Option<&PackageManifest>,
    ) -> Result<PatchOutcome> {
        let entry = self.locate_entry(package_dir, manifest)?;
        storeinject_logger::info(&format!("Found Baileys index at: {}", entry.display()));
        self.patch_entry(package_dir, &entry)
    }

    /// Replaces any earlier block in `entry` and re-exports the store unless the
    /// package already exports it on its own.
    pub fn patch_entry(&self, package_dir: &Path, entry: &Path) -> Result<PatchOutcome> {
        let content = self
            .fs
            .read_to_string(entry)
            .map_err(|e| InjectError::io("read", entry, &e))?;

        let document = EntryDocument::parse(&content);
        let replaced_blocks = document.injected_blocks().count();
        for block in document.injected_blocks() {
            storeinject_logger::debug(
                &format!(
                    "Removing previous block exporting {:?} ({} lines)",
                    block.exports,
                    block.text.lines().count()
                ),
                self.debug,
            );
            if !block.delimited {
                storeinject_logger::info("Replacing export block written by an older release");
            }
        }

        let host = document.host_text();

        if document.host_exports(EXPORT_SYMBOL) {
            // Drop our copy so the symbol is exported only once.
            if replaced_blocks > 0 {
                self.write_entry(entry, &host)?;
            }
            storeinject_logger::info(&format!(
                "{EXPORT_SYMBOL} export already exists in {}",
                file_label(entry)
            ));
            return Ok(PatchOutcome {
                entry: entry.to_path_buf(),
                status: PatchStatus::AlreadyExported,
                replaced_blocks,
            });
        }

        let require_path = require_path_for(package_dir, entry);
        storeinject_logger::debug(&format!("Using require path {require_path}"), self.debug);

        let block = InjectedBlock::render(EXPORT_SYMBOL, &require_path);
        self.write_entry(entry, &append_block(host, &block))?;

        storeinject_logger::success(&format!(
            "{EXPORT_SYMBOL} export added to Baileys {}",
            file_label(entry)
        ));

        Ok(PatchOutcome {
            entry: entry.to_path_buf(),
            status: PatchStatus::Added,
            replaced_blocks,
        })
    }

    fn write_entry(&self, entry: &Path, content: &str) -> Result<()> {
        self.fs
            .write(entry, content)
            .map_err(|e| InjectError::io("write", entry, &e))
    }
}

/// `require` specifier from `entry` to the installed store module.
pub fn require_path_for(package_dir: &Path, entry: &Path) -> String {
    let entry_dir = entry.parent().unwrap_or(package_dir);
    relative_module_path(entry_dir, &store_module_path(package_dir))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
