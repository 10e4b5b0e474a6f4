//! Entry files as host text interleaved with blocks this tool inserted.
//!
//! A block starts at a `// Added by ... baileys-make-in-memory-store` line and
//! ends at the matching `// End of ...` line. Blocks written before the end
//! marker existed end at the first following line that is exactly `}`.

use lazy_static::lazy_static;
use regex::Regex;

use storeinject_constants::{BLOCK_END_PREFIX, BLOCK_MARKER_ID, BLOCK_START_PREFIX, TOOL_NAME};

lazy_static! {
    static ref EXPORT_ASSIGNMENT: Regex = Regex::new(r"exports\.([A-Za-z_$][\w$]*)\s*=")
        .unwrap_or_else(|e| panic!("invalid export pattern: {e}"));
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedBlock {
    pub text: String,
    /// Symbols assigned on `exports` inside the block.
    pub exports: Vec<String>,
    /// False for blocks that ended at a bare closing brace.
    pub delimited: bool,
}

impl InjectedBlock {
    fn new(text: String, delimited: bool) -> Self {
        let exports = EXPORT_ASSIGNMENT
            .captures_iter(&text)
            .filter_map(|caps| caps.get(1))
            .map(|symbol| symbol.as_str().to_string())
            .collect();

        Self {
            text,
            exports,
            delimited,
        }
    }

    /// Guarded re-export of `symbol` from `require_path`.
    #[must_use]
    pub fn render(symbol: &str, require_path: &str) -> String {
        format!(
            "{BLOCK_START_PREFIX} {TOOL_NAME}\n\
             try {{\n\
             \x20 const {symbol}Module = require(\"{require_path}\");\n\
             \x20 exports.{symbol} = {symbol}Module.{symbol} || {symbol}Module.default;\n\
             }} catch (error) {{\n\
             \x20 // {symbol} not available\n\
             }}\n\
             {BLOCK_END_PREFIX} {TOOL_NAME}\n"
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Host(String),
    Injected(InjectedBlock),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDocument {
    segments: Vec<Segment>,
}

impl EntryDocument {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.split_inclusive('\n').collect();
        let mut segments = Vec::new();
        let mut host = String::new();
        let mut index = 0;

        while let Some(line) = lines.get(index) {
            if is_start_marker(line) {
                if let Some((end, delimited)) = find_block_end(&lines, index) {
                    let block_text = lines.get(index..=end).map(|block| block.concat());
                    if let Some(block_text) = block_text {
                        if !host.is_empty() {
                            segments.push(Segment::Host(std::mem::take(&mut host)));
                        }
                        segments.push(Segment::Injected(InjectedBlock::new(block_text, delimited)));
                        index = end + 1;
                        continue;
                    }
                }
            }

            host.push_str(line);
            index += 1;
        }

        if !host.is_empty() {
            segments.push(Segment::Host(host));
        }

        Self { segments }
    }

    pub fn injected_blocks(&self) -> impl Iterator<Item = &InjectedBlock> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Injected(block) => Some(block),
            Segment::Host(_) => None,
        })
    }

    #[must_use]
    pub fn has_injected(&self) -> bool {
        self.injected_blocks().next().is_some()
    }

    /// Whether text outside our blocks already exports `symbol`.
    #[must_use]
    pub fn host_exports(&self, symbol: &str) -> bool {
        self.segments.iter().any(|segment| match segment {
            Segment::Host(text) => declares_export(text, symbol),
            Segment::Injected(_) => false,
        })
    }

    /// The file with every injected block (and the blank line before it) removed.
    #[must_use]
    pub fn host_text(&self) -> String {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Host(text) => out.push_str(text),
                Segment::Injected(_) => {
                    if out.ends_with("\n\n") {
                        out.pop();
                    }
                }
            }
        }

        out
    }
}

/// Appends `block` to `host`, separated by one blank line unless `host` is empty.
#[must_use]
pub fn append_block(mut host: String, block: &str) -> String {
    if !host.is_empty() {
        if !host.ends_with('\n') {
            host.push('\n');
        }
        host.push('\n');
    }
    host.push_str(block);
    host
}

fn declares_export(text: &str, symbol: &str) -> bool {
    let symbol = regex::escape(symbol);
    let pattern = format!(
        r#"exports\.{symbol}\s*=|defineProperty\(\s*exports\s*,\s*["']{symbol}["']"#
    );
    Regex::new(&pattern).is_ok_and(|re| re.is_match(text))
}

fn is_start_marker(line: &str) -> bool {
    let line = line.trim();
    line.starts_with(BLOCK_START_PREFIX) && line.contains(BLOCK_MARKER_ID)
}

fn is_end_marker(line: &str) -> bool {
    let line = line.trim();
    line.starts_with(BLOCK_END_PREFIX) && line.contains(BLOCK_MARKER_ID)
}

// Nearest end marker before the next start marker; failing that, the nearest
// bare closing brace.
fn find_block_end(lines: &[&str], start: usize) -> Option<(usize, bool)> {
    let mut closing_brace = None;

    for (index, line) in lines.iter().enumerate().skip(start + 1) {
        if is_start_marker(line) {
            break;
        }
        if is_end_marker(line) {
            return Some((index, true));
        }
        if closing_brace.is_none() && line.trim_end() == "}" {
            closing_brace = Some(index);
        }
    }

    closing_brace.map(|index| (index, false))
}
