pub mod config;
pub mod entry;
pub mod fs;
pub mod installer;
pub mod layout;
pub mod locator;
pub mod manager;
pub mod manifest;
pub mod patcher;
pub mod transform;

#[cfg(test)]
mod testing;

pub use config::InjectConfig;
pub use fs::{FileSystem, OsFileSystem};
pub use installer::FileInstaller;
pub use manager::{InjectManager, InjectReport};
pub use patcher::{EntryPatcher, PatchOutcome, PatchStatus};

pub fn inject(config: InjectConfig) -> anyhow::Result<InjectReport> {
    let manager = InjectManager::new(config);
    manager.run().map_err(|e| anyhow::anyhow!(e))
}
