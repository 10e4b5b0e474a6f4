pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Injects makeInMemoryStore into an installed Baileys package";
pub const BIN_NAME: &str = "storeinject";

/// Name this tool is published under; appears in every block it writes.
pub const TOOL_NAME: &str = "@naanzitos/baileys-make-in-memory-store";

pub const TARGET_PACKAGE: &str = "@adiwajshing/baileys";
pub const PACKAGE_JSON: &str = "package.json";

/// Path of the store directory relative to the target package root.
pub const STORE_SUBDIR: &[&str] = &["lib", "Store"];

pub const STORE_FILES: &[&str] = &[
    "make-in-memory-store.js",
    "make-ordered-dictionary.js",
    "object-repository.js",
];

/// The one bundled file that receives the named compatibility export.
pub const COMPAT_FILE: &str = "make-in-memory-store.js";
pub const COMPAT_EXPORT: &str =
    "\n\n// Named export for compatibility\nexports.makeInMemoryStore = exports.default;\n";

pub const EXPORT_SYMBOL: &str = "makeInMemoryStore";
pub const STORE_MODULE: &str = "make-in-memory-store";

pub const BLOCK_START_PREFIX: &str = "// Added by";
pub const BLOCK_END_PREFIX: &str = "// End of";
/// Substring that identifies a start marker as ours, including older releases.
pub const BLOCK_MARKER_ID: &str = "baileys-make-in-memory-store";

pub const TROUBLESHOOTING: &[&str] = &[
    "Make sure @whiskeysockets/baileys is installed",
    "Try: npm install @whiskeysockets/baileys",
    "Then reinstall: npm uninstall @naanzitos/baileys-make-in-memory-store && npm install @naanzitos/baileys-make-in-memory-store",
];

pub const USAGE_EXAMPLES: &[&str] = &[
    r#"const { makeInMemoryStore } = require("@whiskeysockets/baileys")"#,
    r#"import { makeInMemoryStore } from "@whiskeysockets/baileys""#,
    r#"import pkg from "@whiskeysockets/baileys"; const { makeInMemoryStore } = pkg"#,
];
