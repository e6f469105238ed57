//! Console report tables

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;
use polars::prelude::*;

use crate::pipeline::{
    global_sales_correlations, CategoryProfile, CleaningReport, ColumnSummary, CorrelationMatrix,
    SalesTotal, STATISTIC_NAMES,
};

/// Summary of one full analysis run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_cleaned: usize,
    pub outputs: Vec<PathBuf>,
    pub charts_rendered: usize,
    pub step_times: Vec<(String, Duration)>,
}

impl RunSummary {
    pub fn new(rows_loaded: usize) -> Self {
        Self {
            rows_loaded,
            rows_cleaned: rows_loaded,
            ..Default::default()
        }
    }

    pub fn record_step(&mut self, step: &str, elapsed: Duration) {
        self.step_times.push((step.to_string(), elapsed));
    }

    pub fn add_output(&mut self, path: PathBuf) {
        self.outputs.push(path);
    }

    pub fn total_time(&self) -> Duration {
        self.step_times.iter().map(|(_, t)| *t).sum()
    }

    pub fn display(&self) {
        print_section("📋", "RUN SUMMARY");

        let mut table = new_table(&["Metric", "Value"]);
        table.add_row(vec![Cell::new("📁 Rows Loaded"), Cell::new(self.rows_loaded)]);

        let dropped = self.rows_loaded.saturating_sub(self.rows_cleaned);
        table.add_row(vec![
            Cell::new("🗑️  Rows Dropped (no year)"),
            Cell::new(dropped).fg(if dropped == 0 { Color::White } else { Color::Red }),
        ]);
        table.add_row(vec![
            Cell::new("✅ Rows Cleaned"),
            Cell::new(self.rows_cleaned)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![
            Cell::new("📊 Charts Rendered"),
            Cell::new(self.charts_rendered),
        ]);
        for (step, elapsed) in &self.step_times {
            table.add_row(vec![
                Cell::new(format!("⏱️  {}", step)),
                Cell::new(format!("{:.2?}", elapsed)),
            ]);
        }
        table.add_row(vec![
            Cell::new("⏱️  Total"),
            Cell::new(format!("{:.2?}", self.total_time())).add_attribute(Attribute::Bold),
        ]);
        print_indented(&table);

        if !self.outputs.is_empty() {
            println!();
            println!("      {}", style("Outputs").yellow());
            for path in &self.outputs {
                println!("        {} {}", style("•").dim(), path.display());
            }
        }
    }
}

/// Rows shown in the first-rows preview
pub const PREVIEW_ROWS: usize = 5;

/// Column names and their loaded types, in table order
pub fn column_types(df: &DataFrame) -> Vec<(String, String)> {
    df.get_columns()
        .iter()
        .map(|column| (column.name().to_string(), column.dtype().to_string()))
        .collect()
}

/// Column list with types
pub fn display_column_types(df: &DataFrame) {
    print_section("🧾", "COLUMNS");

    let mut table = new_table(&["Column", "Type"]);
    for (column, dtype) in column_types(df) {
        table.add_row(vec![Cell::new(column), Cell::new(dtype).fg(Color::Cyan)]);
    }
    print_indented(&table);
}

/// First `rows` rows of the table as loaded
pub fn display_preview(df: &DataFrame, rows: usize) {
    print_section("👀", &format!("FIRST {} ROWS", rows));
    for line in df.head(Some(rows)).to_string().lines() {
        println!("    {}", line);
    }
}

/// Missing values per column; zero counts are dimmed
pub fn display_missing_values(title: &str, missing: &[(String, usize)]) {
    print_section("🔍", title);

    let mut table = new_table(&["Column", "Missing"]);
    for (column, count) in missing {
        let cell = Cell::new(count).set_alignment(CellAlignment::Right);
        table.add_row(vec![
            Cell::new(column),
            if *count > 0 { cell.fg(Color::Yellow) } else { cell.fg(Color::DarkGrey) },
        ]);
    }
    print_indented(&table);
}

/// What the cleaner changed
pub fn display_cleaning_report(report: &CleaningReport) {
    print_section("🧹", "CLEANING");

    let mut table = new_table(&["Step", "Detail"]);
    table.add_row(vec![
        Cell::new("User_Score rescale (x10)"),
        Cell::new(if report.user_score_rescaled { "applied" } else { "skipped" }),
    ]);
    for fill in &report.fills {
        let detail = match fill.fill_value {
            Some(value) => format!("{} filled with median {:.2}", fill.filled, value),
            None => "nothing missing".to_string(),
        };
        table.add_row(vec![Cell::new(format!("{} median fill", fill.column)), Cell::new(detail)]);
    }
    table.add_row(vec![
        Cell::new("Rating placeholder"),
        Cell::new(format!("{} set to \"Unknown\"", report.ratings_filled)),
    ]);
    table.add_row(vec![
        Cell::new("Rows without year"),
        Cell::new(format!("{} dropped", report.rows_dropped)),
    ]);
    print_indented(&table);
}

/// Score ranges after rescaling (both on 0-100)
pub fn display_score_ranges(stats: &[ColumnSummary], columns: &[&str]) {
    for summary in stats.iter().filter(|s| columns.contains(&s.column.as_str())) {
        println!(
            "      {} range: {} - {}",
            summary.column,
            style(format_stat(summary.min)).cyan(),
            style(format_stat(summary.max)).cyan()
        );
    }
}

/// Descriptive statistics, one row per statistic
pub fn display_statistics(stats: &[ColumnSummary]) {
    print_section("📈", "DESCRIPTIVE STATISTICS");

    let mut header = vec![""];
    header.extend(stats.iter().map(|s| s.column.as_str()));
    let mut table = new_table(&header);

    let rows: Vec<[f64; 8]> = stats.iter().map(|s| s.as_row()).collect();
    for (i, name) in STATISTIC_NAMES.iter().enumerate() {
        let mut cells = vec![Cell::new(name).add_attribute(Attribute::Bold)];
        cells.extend(
            rows.iter()
                .map(|row| Cell::new(format_stat(row[i])).set_alignment(CellAlignment::Right)),
        );
        table.add_row(cells);
    }
    print_indented(&table);
}

/// Distinct counts and most common values of the categorical columns
pub fn display_categories(categories: &[CategoryProfile]) {
    print_section("🏷️ ", "CATEGORIES");

    for profile in categories {
        println!();
        println!(
            "      {} {}",
            style(format!("{}:", profile.column)).yellow(),
            style(format!("{} unique", profile.distinct)).dim()
        );

        let mut table = new_table(&[profile.column.as_str(), "Count"]);
        for (value, count) in &profile.top {
            table.add_row(vec![
                Cell::new(value),
                Cell::new(count).set_alignment(CellAlignment::Right),
            ]);
        }
        print_indented(&table);
    }
}

/// Total and average sales per region
pub fn display_sales(totals: &[SalesTotal]) {
    print_section("💰", "SALES BY REGION (millions)");

    let mut table = new_table(&["Column", "Total", "Average"]);
    for total in totals {
        table.add_row(vec![
            Cell::new(&total.column),
            Cell::new(format!("{:.2}", total.total)).set_alignment(CellAlignment::Right),
            Cell::new(total.mean.map_or_else(|| "-".to_string(), |m| format!("{:.4}", m)))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    print_indented(&table);
}

/// Correlation of global sales with critic and user scores
pub fn display_score_sales_correlation(matrix: &CorrelationMatrix) {
    print_section("🔗", "GLOBAL SALES CORRELATION");

    let mut table = new_table(&["Column", "Pearson r"]);
    for (column, r) in global_sales_correlations(matrix) {
        table.add_row(vec![
            Cell::new(column),
            Cell::new(format_stat(r)).set_alignment(CellAlignment::Right),
        ]);
    }
    print_indented(&table);
}

/// Format a statistic with up to four decimals; NaN renders as "NaN"
pub fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e12 {
        format!("{:.0}", value)
    } else {
        format!("{:.4}", value)
    }
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        header
            .iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

fn print_section(icon: &str, title: &str) {
    println!();
    println!("    {} {}", style(icon).cyan(), style(title).white().bold());
    println!("    {}", style("─".repeat(50)).dim());
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}
