//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints, URLs
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use serde::Serialize;
use std::fmt::Display;

use crate::error::Result;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ base64 decoding failed on ...`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ set ELASTICLOUD_CLOUD_ID`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  primary    https://es.example.com:443`
pub fn kv(label: &str, value: impl Display) {
    let label = format!("{:<10}", label);
    if colors_enabled() {
        println!("  {} {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {} {}", label, value);
    }
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// Endpoints
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    header(title);
    rule();
}

/// Format a URL in cyan.
pub fn url(u: &str) -> String {
    if colors_enabled() {
        style(u).cyan().to_string()
    } else {
        u.to_string()
    }
}

/// Print a value as pretty JSON on stdout.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a bare value on stdout, for piping.
pub fn plain(value: impl Display) {
    println!("{}", value);
}
