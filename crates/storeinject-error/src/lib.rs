use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub enum InjectError {
    NodeModulesNotFound(String),
    SourceMissing(String),
    IoError(String),
    EntryNotFound(String),
}

impl InjectError {
    /// Wraps an I/O failure with the action and path it happened on.
    pub fn io(action: &str, path: &Path, err: &io::Error) -> Self {
        let reason = if err.kind() == io::ErrorKind::PermissionDenied {
            "permission denied".to_string()
        } else {
            err.to_string()
        };
        Self::IoError(format!("Failed to {action} {}: {reason}", path.display()))
    }

    /// Everything but a missing entry file aborts the run.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::EntryNotFound(_))
    }
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeModulesNotFound(start) => {
                write!(f, "node_modules directory not found (searched upward from {start})")
            }
            Self::SourceMissing(path) => {
                write!(f, "Source file not found: {path}")
            }
            Self::IoError(msg) => {
                write!(f, "IO error: {msg}")
            }
            Self::EntryNotFound(package) => {
                write!(f, "Could not find {package} index.js to update")
            }
        }
    }
}

impl std::error::Error for InjectError {}

pub type Result<T> = std::result::Result<T, InjectError>;
