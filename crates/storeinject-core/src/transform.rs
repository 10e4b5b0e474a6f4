use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

use storeinject_constants::{COMPAT_EXPORT, COMPAT_FILE};
use storeinject_error::{InjectError, Result};

use crate::fs::FileSystem;

lazy_static! {
    // The bundled files were written two levels below the package root
    // (`src/Store`); once installed they sit one level below it (`lib/Store`).
    static ref REWRITE_RULES: Vec<(Regex, &'static str)> = vec![
        (
            Regex::new(r"require\('\.\./\.\./([^'\n]*)'\)").unwrap_or_else(|e| panic!("invalid rewrite pattern: {e}")),
            r#"require("../${1}")"#,
        ),
        (
            Regex::new(r"require\('\./([^'\n]*)'\)").unwrap_or_else(|e| panic!("invalid rewrite pattern: {e}")),
            r#"require("./${1}")"#,
        ),
    ];
}

/// A bundled file shipped next to this tool.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub origin: PathBuf,
    pub raw: String,
}

impl SourceFile {
    pub fn load(fs: &dyn FileSystem, source_dir: &Path, name: &str) -> Result<Self> {
        let origin = source_dir.join(name);
        if !fs.is_file(&origin) {
            return Err(InjectError::SourceMissing(origin.display().to_string()));
        }

        let raw = fs
            .read_to_string(&origin)
            .map_err(|e| InjectError::io("read", &origin, &e))?;

        Ok(Self {
            name: name.to_string(),
            origin,
            raw,
        })
    }

    #[must_use]
    pub fn transform(&self) -> String {
        transform_content(&self.name, &self.raw)
    }
}

/// Rewrites relative requires for the installed location and, for the store
/// module, appends the named compatibility export.
pub fn transform_content(file_name: &str, raw: &str) -> String {
    let mut content = rewrite_requires(raw);

    if file_name == COMPAT_FILE {
        content.push_str(COMPAT_EXPORT);
    }

    content
}

/// Applies the fixed rewrite rules in order; other require forms pass through.
pub fn rewrite_requires(raw: &str) -> String {
    REWRITE_RULES
        .iter()
        .fold(raw.to_string(), |content, (pattern, replacement)| {
            pattern.replace_all(&content, *replacement).into_owned()
        })
}
