//! Console messages
//!
//! Everything here goes to stdout and is informational only. Write errors
//! (closed pipe, full disk) are ignored: reporting never fails a run.

use crate::error::ConvertError;
use crate::types::ConvertConfig;
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Announce the start of a conversion
pub fn start(config: &ConvertConfig) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{}", "Excel to CSV conversion started".bold().green());
    let _ = writeln!(out, "   Input: {}", config.input.display());
    let _ = writeln!(out, "...");
}

/// List the produced files in the order they were written
pub fn complete(outputs: &[PathBuf]) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{}", "Excel to CSV conversion completed".bold().green());
    let _ = writeln!(out, "   Output files:");
    for output in outputs {
        let _ = writeln!(out, "   - {}", output.display());
    }
    let _ = out.flush();
}

/// Short failure message, followed by the underlying error text if any
pub fn failure(err: &ConvertError) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{}", err.to_string().bold().red());
    if let Some(detail) = err.detail() {
        let _ = writeln!(out, "   {}", detail);
    }
    let _ = out.flush();
}
