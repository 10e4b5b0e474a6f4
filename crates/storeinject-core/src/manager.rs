use std::path::PathBuf;

use storeinject_error::Result;
use storeinject_logger;

use crate::config::InjectConfig;
use crate::fs::{FileSystem, OsFileSystem};
use crate::installer::FileInstaller;
use crate::layout::{package_dir, store_target_dir};
use crate::locator::find_node_modules;
use crate::manifest::PackageManifest;
use crate::patcher::{EntryPatcher, PatchOutcome};

#[derive(Debug, Clone)]
pub struct InjectReport {
    pub target_dir: PathBuf,
    pub installed: Vec<PathBuf>,
    /// `None` when no entry file could be found.
    pub patch: Option<PatchOutcome>,
    pub package_version: Option<String>,
    pub warnings: Vec<String>,
}

pub struct InjectManager<F: FileSystem = OsFileSystem> {
    fs: F,
    config: InjectConfig,
}

impl InjectManager<OsFileSystem> {
    pub const fn new(config: InjectConfig) -> Self {
        Self {
            fs: OsFileSystem,
            config,
        }
    }
}

impl<F: FileSystem> InjectManager<F> {
    pub fn with_fs(fs: F, config: InjectConfig) -> Self {
        Self { fs, config }
    }

    /// Locate, install, then patch. Only a missing entry file is survivable.
    pub fn run(&self) -> Result<InjectReport> {
        let debug = self.config.debug;

        let node_modules = find_node_modules(&self.fs, &self.config.start_dir)?;
        storeinject_logger::debug(
            &format!("Using node_modules at {}", node_modules.display()),
            debug,
        );

        let target_dir = store_target_dir(&node_modules, &self.config.package_name);
        storeinject_logger::step(&format!("Installing store files into {}", target_dir.display()));
        let installer = FileInstaller::new(&self.fs, &self.config.source_dir, debug);
        let installed = installer.install(&target_dir, &self.config.files)?;

        let package_dir = package_dir(&node_modules, &self.config.package_name);
        let manifest = PackageManifest::read(&self.fs, &package_dir);
        let package_version = manifest.as_ref().and_then(|m| m.version.clone());
        if let Some(version) = &package_version {
            storeinject_logger::info(&format!(
                "Found {} v{version}",
                self.config.package_name
            ));
        }

        storeinject_logger::step("Patching package entry file");
        let mut warnings = Vec::new();
        let patcher = EntryPatcher::new(&self.fs, debug);
        let patch = match patcher.patch(&package_dir, manifest.as_ref()) {
            Ok(outcome) => Some(outcome),
            Err(err) if !err.is_fatal() => {
                storeinject_logger::warn(&err.to_string());
                warnings.push(err.to_string());
                None
            }
            Err(err) => return Err(err),
        };

        Ok(InjectReport {
            target_dir,
            installed,
            patch,
            package_version,
            warnings,
        })
    }
}
