//! Terminal styling utilities for a modern, visually appealing CLI

use console::{style, Emoji};
use std::path::Path;

use crate::pipeline::ChartSpec;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
     ██████╗██╗  ██╗██╗   ██╗██████╗ ███╗   ██╗██╗     ███████╗███╗   ██╗███████╗
    ██╔════╝██║  ██║██║   ██║██╔══██╗████╗  ██║██║     ██╔════╝████╗  ██║██╔════╝
    ██║     ███████║██║   ██║██████╔╝██╔██╗ ██║██║     █████╗  ██╔██╗ ██║███████╗
    ██║     ██╔══██║██║   ██║██╔══██╗██║╚██╗██║██║     ██╔══╝  ██║╚██╗██║╚════██║
    ╚██████╗██║  ██║╚██████╔╝██║  ██║██║ ╚████║███████╗███████╗██║ ╚████║███████║
     ╚═════╝╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═══╝╚══════╝╚══════╝╚═╝  ╚═══╝╚══════╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("◉").magenta().bold(),
        style("Churn datasets, chart-ready").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the configuration card
pub fn print_config(input: &Path, spec: &ChartSpec) {
    let axis_or_dash = |key: &str| {
        if key.is_empty() {
            "-".to_string()
        } else {
            key.to_string()
        }
    };

    println!("    {}", style("Configuration").cyan().bold());
    println!("    {}", style("─".repeat(50)).dim());
    println!("      {} Input:       {}", FOLDER, truncate_path(input, 40));
    println!(
        "      {} Chart:       {}",
        CHART,
        style(spec.kind).yellow()
    );
    println!("         X-axis:      {}", axis_or_dash(&spec.x_key));
    println!("         Y-axis:      {}", axis_or_dash(&spec.y_key));
    println!(
        "         Aggregation: {}",
        style(spec.aggregation).yellow()
    );
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Churnlens projection complete!").green().bold()
    );
    println!();
}

/// Print a saved-file message
pub fn print_saved(path: &Path) {
    println!(
        "    {} Saved to {}",
        SAVE,
        style(path.display()).yellow()
    );
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("...{}", &s[s.len() - max_len + 3..])
    }
}
