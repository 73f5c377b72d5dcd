//! CLI output formatting.
//!
//! # Output Format
//!
//! ```text
//! 001 assets/freepik/hero.jpg
//!     768px: encoded
//!     1280px: encoded
//!     1600px: original
//! Skip assets/freepik/broken.jpg: Decode failed: ...
//! 002 assets/freepik/team.jpg
//!     768px: original
//!     1280px: original
//!     1600px: original
//! Wrote map for 2 images to data/images.json and variants to assets/optimized
//! ```
//!
//! # Architecture
//!
//! Each `format_*` function returns lines (pure, no I/O) and has a `print_*`
//! wrapper that writes them to stdout. Diagnostics go through `tracing` on
//! stderr; this module only renders the operator-facing report.

use crate::process::{ProcessEvent, ProcessResult, VariantStatus};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Show `path` relative to `root` when possible.
fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Format a single progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::ImageProcessed {
            index,
            source_path,
            variants,
        } => {
            let mut lines = vec![format!("{} {}", format_index(*index), source_path)];
            for variant in variants {
                let status = match variant.status {
                    VariantStatus::Encoded { width, height } => {
                        format!("encoded {}x{}", width, height)
                    }
                    VariantStatus::Original { width } => format!("original ({}px)", width),
                };
                lines.push(format!("    {}: {}", variant.label, status));
            }
            lines
        }
        ProcessEvent::ImageSkipped {
            source_path,
            reason,
        } => vec![format!("Skip {}: {}", source_path, reason)],
    }
}

/// Print a progress event to stdout.
pub fn print_process_event(event: &ProcessEvent) {
    for line in format_process_event(event) {
        println!("{}", line);
    }
}

/// Format the end-of-run summary line.
pub fn format_summary(result: &ProcessResult, root: &Path) -> String {
    let mut line = format!(
        "Wrote map for {} images to {} and variants to {}",
        result.processed,
        display_path(root, &result.manifest_path),
        display_path(root, &result.output_dir)
    );
    if result.skipped > 0 {
        line.push_str(&format!(" ({} skipped)", result.skipped));
    }
    line
}

/// Print the end-of-run summary to stdout.
pub fn print_summary(result: &ProcessResult, root: &Path) {
    println!("{}", format_summary(result, root));
}
