//! Static chart rendering with plotters.
//!
//! Every chart is written as a 1200x800 PNG. Renderers reject empty input
//! with [`EdaError::Chart`] before touching the file system, and any drawing
//! error is surfaced the same way so the caller stops at the first failure.

mod bar;
mod density;
mod heatmap;
mod line;
mod scatter;

pub use bar::{render_bar_chart, render_horizontal_bar_chart, BarChart};
pub use density::{gaussian_kde, render_density_chart, DensityChart, KDE_GRID_SIZE};
pub use heatmap::{coolwarm, render_heatmap};
pub use line::{render_line_chart, LineChart, LineSeriesData};
pub use scatter::{render_scatter_chart, ScatterChart, ScatterSeriesData};

use std::fs;
use std::path::Path;

use log::info;
use plotters::style::RGBColor;
use polars::prelude::*;

use crate::pipeline::columns::{CRITIC_SCORE, GLOBAL_SALES, USER_SCORE};
use crate::pipeline::{genres_in_order, present_values, AnalysisResults, EdaError, Result};

pub(crate) const CHART_SIZE: (u32, u32) = (1200, 800);
pub(crate) const FONT: &str = "sans-serif";

/// Qualitative palette shared by the bar, line and scatter charts
pub const PALETTE: [RGBColor; 12] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
    RGBColor(57, 59, 121),
    RGBColor(173, 73, 74),
];

/// Output file names, in rendering order
pub const CHART_FILES: [&str; 10] = [
    "releases_per_year.png",
    "top_platforms.png",
    "top_genres.png",
    "regional_sales.png",
    "score_density.png",
    "correlation_heatmap.png",
    "critic_vs_user.png",
    "scores_vs_sales.png",
    "genre_trends.png",
    "top_publishers.png",
];

pub(crate) fn palette_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Paired present values of two numeric columns
fn paired_values(df: &DataFrame, x: &str, y: &str) -> Result<Vec<(f64, f64)>> {
    let xs = df.column(x)?.cast(&DataType::Float64)?;
    let ys = df.column(y)?.cast(&DataType::Float64)?;

    Ok(xs
        .f64()?
        .into_iter()
        .zip(ys.f64()?)
        .filter_map(|pair| match pair {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        })
        .collect())
}

/// Render the full chart sequence into `dir`.
///
/// Charts are drawn in [`CHART_FILES`] order; the first failure aborts the
/// remaining ones.
pub fn render_all(df: &DataFrame, results: &AnalysisResults, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| EdaError::chart("output directory", e))?;
    let path = |index: usize| dir.join(CHART_FILES[index]);

    render_bar_chart(
        &BarChart {
            title: "Number of Games Released per Year".to_string(),
            x_label: "Year".to_string(),
            y_label: "Number of Games".to_string(),
            bars: results
                .releases_per_year
                .iter()
                .map(|(year, count)| (year.to_string(), *count as f64))
                .collect(),
            multicolor: false,
        },
        &path(0),
    )?;

    render_bar_chart(
        &BarChart {
            title: "Top 10 Platforms by Global Sales".to_string(),
            x_label: "Platform".to_string(),
            y_label: "Global Sales (millions)".to_string(),
            bars: results.top_platforms.clone(),
            multicolor: true,
        },
        &path(1),
    )?;

    render_bar_chart(
        &BarChart {
            title: "Top 10 Genres by Global Sales".to_string(),
            x_label: "Genre".to_string(),
            y_label: "Global Sales (millions)".to_string(),
            bars: results.top_genres.clone(),
            multicolor: true,
        },
        &path(2),
    )?;

    render_bar_chart(
        &BarChart {
            title: "Regional Sales Distribution".to_string(),
            x_label: "Region".to_string(),
            y_label: "Total Sales (millions)".to_string(),
            bars: results.regional_sales.clone(),
            multicolor: true,
        },
        &path(3),
    )?;

    render_density_chart(
        &DensityChart {
            title: "Distribution of Critic vs User Scores".to_string(),
            x_label: "Score (0-100)".to_string(),
            series: vec![
                ("Critic Score".to_string(), present_values(df, CRITIC_SCORE)?),
                ("User Score".to_string(), present_values(df, USER_SCORE)?),
            ],
        },
        &path(4),
    )?;

    render_heatmap(
        "Correlation Matrix for Numerical Features",
        &results.correlation,
        &path(5),
    )?;

    render_scatter_chart(
        &ScatterChart {
            title: "Critic Score vs User Score".to_string(),
            x_label: "Critic Score (0-100)".to_string(),
            y_label: "User Score (0-100)".to_string(),
            series: vec![ScatterSeriesData {
                label: None,
                points: paired_values(df, CRITIC_SCORE, USER_SCORE)?,
            }],
        },
        &path(6),
    )?;

    render_scatter_chart(
        &ScatterChart {
            title: "Sales vs Scores".to_string(),
            x_label: "Score (0-100)".to_string(),
            y_label: "Global Sales (millions)".to_string(),
            series: vec![
                ScatterSeriesData {
                    label: Some("Critic Score".to_string()),
                    points: paired_values(df, CRITIC_SCORE, GLOBAL_SALES)?,
                },
                ScatterSeriesData {
                    label: Some("User Score".to_string()),
                    points: paired_values(df, USER_SCORE, GLOBAL_SALES)?,
                },
            ],
        },
        &path(7),
    )?;

    let genre_series = genres_in_order(&results.genre_trends)
        .into_iter()
        .map(|genre| LineSeriesData {
            points: results
                .genre_trends
                .iter()
                .filter(|entry| entry.genre == genre)
                .map(|entry| (entry.year, entry.global_sales))
                .collect(),
            label: genre,
        })
        .collect();
    render_line_chart(
        &LineChart {
            title: "Global Sales Trends by Genre Over Time".to_string(),
            x_label: "Year".to_string(),
            y_label: "Global Sales (millions)".to_string(),
            series: genre_series,
        },
        &path(8),
    )?;

    render_horizontal_bar_chart(
        &BarChart {
            title: "Top 10 Publishers by Global Sales".to_string(),
            x_label: "Global Sales (millions)".to_string(),
            y_label: "Publisher".to_string(),
            bars: results.top_publishers.clone(),
            multicolor: true,
        },
        &path(9),
    )?;

    info!("Rendered {} charts into {}", CHART_FILES.len(), dir.display());
    Ok(())
}
