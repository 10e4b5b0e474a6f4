use std::env;
use std::path::PathBuf;

use storeinject_constants::{STORE_FILES, TARGET_PACKAGE};
use storeinject_error::{InjectError, Result};

/// Everything one injection run depends on, resolved up front.
#[derive(Debug, Clone)]
pub struct InjectConfig {
    /// Where the upward `node_modules` search begins.
    pub start_dir: PathBuf,
    /// Directory holding the bundled store files.
    pub source_dir: PathBuf,
    pub package_name: String,
    pub files: Vec<String>,
    pub debug: bool,
}

impl InjectConfig {
    pub fn new(start_dir: impl Into<PathBuf>, source_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            source_dir: source_dir.into(),
            package_name: TARGET_PACKAGE.to_string(),
            files: STORE_FILES.iter().map(ToString::to_string).collect(),
            debug: false,
        }
    }

    /// Starts from the working directory; sources default to the executable's directory.
    pub fn from_process(source_dir: Option<PathBuf>, debug: bool) -> Result<Self> {
        let start_dir = env::current_dir()
            .map_err(|e| InjectError::IoError(format!("Failed to read working directory: {e}")))?;

        let source_dir = match source_dir {
            Some(dir) => dir,
            None => executable_dir()?,
        };

        Ok(Self {
            debug,
            ..Self::new(start_dir, source_dir)
        })
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe()
        .map_err(|e| InjectError::IoError(format!("Failed to locate executable: {e}")))?;

    exe.parent()
        .map(PathBuf::from)
        .ok_or_else(|| InjectError::IoError(format!("{} has no parent directory", exe.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = InjectConfig::new("/app", "/tool");

        assert_eq!(config.package_name, "@adiwajshing/baileys");
        assert_eq!(
            config.files,
            vec![
                "make-in-memory-store.js",
                "make-ordered-dictionary.js",
                "object-repository.js"
            ]
        );
        assert!(!config.debug);
    }

    #[test]
    fn test_from_process_honours_source_override() {
        let config = InjectConfig::from_process(Some(PathBuf::from("/opt/store")), true).unwrap();

        assert_eq!(config.source_dir, PathBuf::from("/opt/store"));
        assert_eq!(config.start_dir, env::current_dir().unwrap());
        assert!(config.debug);
    }
}
