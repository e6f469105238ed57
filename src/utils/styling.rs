//! Terminal styling for the analysis run

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");

const BOX_WIDTH: usize = 56;

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
    ██╗   ██╗ ██████╗ ███████╗██████╗  █████╗
    ██║   ██║██╔════╝ ██╔════╝██╔══██╗██╔══██╗
    ██║   ██║██║  ███╗█████╗  ██║  ██║███████║
    ╚██╗ ██╔╝██║   ██║██╔══╝  ██║  ██║██╔══██║
     ╚████╔╝ ╚██████╔╝███████╗██████╔╝██║  ██║
      ╚═══╝   ╚═════╝ ╚══════╝╚═════╝ ╚═╝  ╚═╝
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("🎮").magenta().bold(),
        style("Exploratory analysis of video game sales").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(input: &Path, output_dir: &Path, charts_dir: Option<&Path>) {
    let line = "─".repeat(BOX_WIDTH - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(BOX_WIDTH - 20)
    );
    println!("    ├{}┤", line);
    println!("    │  {} Input:  {:<39}│", FOLDER, truncate_path(input, 38));
    println!("    │  {} Output: {:<39}│", SAVE, truncate_path(output_dir, 38));
    let charts = match charts_dir {
        Some(dir) => truncate_path(dir, 38),
        None => "disabled".to_string(),
    };
    println!("    │  {} Charts: {:<39}│", CHART, charts);
    println!("    └{}┘", line);
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

/// Print how long a step took
pub fn print_step_time(elapsed: Duration) {
    println!("      {}", style(format!("⏱  {:.2?}", elapsed)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Video game sales analysis complete!").green().bold()
    );
    println!();
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize) {
    println!("      Found {} {}", style(count).yellow().bold(), description);
}

fn truncate_path(path: &Path, max_len: usize) -> String {
    truncate_string(&path.display().to_string(), max_len)
}

/// Keep the tail of `s`, prefixed with "..." when it does not fit
fn truncate_string(s: &str, max_len: usize) -> String {
    let len = s.chars().count();
    if len <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(len + 3 - max_len).collect();
        format!("...{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        let truncated = truncate_string("data/raw/very_long_file_name.csv", 12);
        assert_eq!(truncated.chars().count(), 12);
        assert!(truncated.starts_with("..."));
        assert!(truncated.ends_with("name.csv"));
    }
}
