use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

use storeinject_constants::{EXPORT_SYMBOL, TROUBLESHOOTING, USAGE_EXAMPLES};
use storeinject_core::{InjectConfig, InjectReport, PatchStatus};
use storeinject_logger;

pub struct InjectHandler;

impl InjectHandler {
    pub fn handle_inject(source_dir: Option<PathBuf>, debug: bool) -> Result<()> {
        Self::print_inject_header();

        let result = InjectConfig::from_process(source_dir, debug)
            .map_err(anyhow::Error::from)
            .and_then(Self::inject_with_config);

        if let Err(err) = &result {
            Self::print_troubleshooting(err);
        }
        result.map(|_| ())
    }

    /// Runs one injection and prints its summary. Errors are returned unprinted.
    pub fn inject_with_config(config: InjectConfig) -> Result<InjectReport> {
        let report = storeinject_core::inject(config)?;
        Self::print_summary(&report);
        Ok(report)
    }

    fn print_inject_header() {
        storeinject_logger::finish_line(&format!(
            "{} {}",
            "storeinject".bright_cyan().bold(),
            "Baileys makeInMemoryStore fix - injecting files...".bright_white()
        ));
    }

    fn print_summary(report: &InjectReport) {
        if report.warnings.is_empty() {
            storeinject_logger::finish("Injection completed successfully!");
        } else {
            storeinject_logger::finish(&format!(
                "Injection completed with {} warning(s)",
                report.warnings.len()
            ));
        }

        storeinject_logger::finish_line(&format!(
            "{} {}",
            "Store files are now available in".bright_white().bold(),
            report.target_dir.display().bright_white()
        ));
        for path in &report.installed {
            storeinject_logger::finish_line(&format!("   - {}", file_name(path)));
        }

        if let Some(line) = patch_summary(report) {
            storeinject_logger::finish_line(&line);
        }

        storeinject_logger::finish_line("");
        storeinject_logger::finish_line(&format!(
            "{}",
            "You can now use:".bright_white().bold()
        ));
        for example in USAGE_EXAMPLES {
            storeinject_logger::finish_line(&format!("   - {}", example.bright_black()));
        }
    }

    fn print_troubleshooting(err: &anyhow::Error) {
        storeinject_logger::error(&format!("Error during injection: {err}"));
        storeinject_logger::hint("Troubleshooting:");
        for line in troubleshooting_lines() {
            storeinject_logger::hint(&line);
        }
    }
}

fn troubleshooting_lines() -> Vec<String> {
    TROUBLESHOOTING
        .iter()
        .enumerate()
        .map(|(index, suggestion)| format!("{}. {suggestion}", index + 1))
        .collect()
}

fn patch_summary(report: &InjectReport) -> Option<String> {
    let outcome = report.patch.as_ref()?;
    let entry = outcome.entry.display();

    Some(match outcome.status {
        PatchStatus::Added if outcome.replaced_blocks > 0 => {
            format!("{EXPORT_SYMBOL} export refreshed in {entry}")
        }
        PatchStatus::Added => format!("{EXPORT_SYMBOL} export added to {entry}"),
        PatchStatus::AlreadyExported => format!("{EXPORT_SYMBOL} already exported by {entry}"),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
