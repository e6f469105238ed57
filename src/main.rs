//! VGEDA: video game sales exploratory analysis CLI
//!
//! Loads the sales CSV, cleans it, writes the cleaned table and the
//! descriptive statistics table, prints a console report and renders charts.

use std::env;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use log::LevelFilter;

use vgeda::cli::Cli;
use vgeda::pipeline::columns::{CRITIC_SCORE, USER_SCORE};
use vgeda::pipeline::{analyze_missing_values, clean_dataset, dataset_shape, load_dataset, AnalysisResults};
use vgeda::report::charts::{render_all, CHART_FILES};
use vgeda::report::{
    display_categories, display_cleaning_report, display_column_types, display_missing_values,
    display_preview, display_sales, display_score_ranges, display_score_sales_correlation,
    display_statistics, write_cleaned_table, write_descriptive_statistics, RunSummary,
    PREVIEW_ROWS,
};
use vgeda::utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_count, print_info, print_step_header, print_step_time, print_success,
};

fn init_logging() {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if env::var("RUST_LOG").is_err() {
        builder.filter_module("vgeda", LevelFilter::Warn);
    }
    let _ = builder.format_timestamp_millis().try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let input = cli.input();
    let cleaned_path = cli.cleaned_output_path();
    let statistics_path = cli.statistics_output_path();
    let charts_path = cli.charts_path();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(input, &cli.output_dir, charts_path.as_deref());

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let spinner = create_spinner("Reading CSV...");
    let df = load_dataset(input)
        .with_context(|| format!("Failed to load dataset: {}", input.display()))?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols, memory_mb) = dataset_shape(&df);
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);
    display_column_types(&df);
    display_preview(&df, PREVIEW_ROWS);

    let missing_before = analyze_missing_values(&df);
    let columns_with_missing = missing_before.iter().filter(|(_, n)| *n > 0).count();
    print_count("column(s) with missing values", columns_with_missing);
    display_missing_values("MISSING VALUES (RAW)", &missing_before);

    let mut summary = RunSummary::new(rows);
    let elapsed = step_start.elapsed();
    summary.record_step("Load", elapsed);
    print_step_time(elapsed);

    // Step 2: Clean
    print_step_header(2, "Clean Dataset");
    let step_start = Instant::now();
    let spinner = create_spinner("Rescaling scores and imputing missing values...");
    let (df, report) = clean_dataset(df).context("Failed to clean dataset")?;
    finish_with_success(&spinner, "Cleaning complete");

    display_cleaning_report(&report);
    display_missing_values("MISSING VALUES (CLEANED)", &analyze_missing_values(&df));
    summary.rows_cleaned = df.height();

    let elapsed = step_start.elapsed();
    summary.record_step("Clean", elapsed);
    print_step_time(elapsed);

    // Step 3: Save cleaned table
    print_step_header(3, "Save Cleaned Table");
    let step_start = Instant::now();
    let spinner = create_spinner("Writing cleaned CSV...");
    write_cleaned_table(&df, &cleaned_path)
        .with_context(|| format!("Failed to write cleaned table: {}", cleaned_path.display()))?;
    finish_with_success(&spinner, &format!("Saved to {}", cleaned_path.display()));
    summary.add_output(cleaned_path);

    let elapsed = step_start.elapsed();
    summary.record_step("Save", elapsed);
    print_step_time(elapsed);

    // Step 4: Aggregate
    print_step_header(4, "Aggregate and Describe");
    let step_start = Instant::now();
    let spinner = create_spinner("Computing statistics, rankings and correlations...");
    let results = AnalysisResults::compute(&df).context("Failed to aggregate dataset")?;
    write_descriptive_statistics(&results.statistics, &statistics_path).with_context(|| {
        format!(
            "Failed to write descriptive statistics: {}",
            statistics_path.display()
        )
    })?;
    finish_with_success(&spinner, &format!("Saved to {}", statistics_path.display()));
    summary.add_output(statistics_path);

    display_score_ranges(&results.statistics, &[CRITIC_SCORE, USER_SCORE]);
    display_statistics(&results.statistics);
    display_categories(&results.categories);
    display_sales(&results.sales_totals);
    display_score_sales_correlation(&results.score_sales_correlation);

    let elapsed = step_start.elapsed();
    summary.record_step("Aggregate", elapsed);
    print_step_time(elapsed);

    // Step 5: Charts
    print_step_header(5, "Render Charts");
    match charts_path {
        Some(dir) => {
            let step_start = Instant::now();
            let spinner = create_spinner("Rendering charts...");
            render_all(&df, &results, &dir)
                .with_context(|| format!("Failed to render charts into {}", dir.display()))?;
            finish_with_success(
                &spinner,
                &format!("Rendered {} charts into {}", CHART_FILES.len(), dir.display()),
            );
            summary.charts_rendered = CHART_FILES.len();
            summary.add_output(dir);

            let elapsed = step_start.elapsed();
            summary.record_step("Charts", elapsed);
            print_step_time(elapsed);
        }
        None => {
            let spinner = create_spinner("Skipping charts...");
            finish_with_warning(&spinner, "Chart rendering disabled");
            print_info("Run without --no-charts to render PNG charts");
        }
    }

    print_success("All outputs written");
    summary.display();
    print_completion();

    Ok(())
}
