//! Command-line argument definitions using clap

use clap::Parser;
use std::path::{Path, PathBuf};

/// File name of the cleaned table inside the output directory
pub const CLEANED_FILE_NAME: &str = "vgames_cleaned.csv";

/// File name of the descriptive statistics table inside the output directory
pub const STATISTICS_FILE_NAME: &str = "descriptive_statistics.csv";

/// VGEDA - Load, clean and summarize a video game sales dataset
#[derive(Parser, Debug)]
#[command(name = "vgeda")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV with the 15 video game sales columns
    #[arg(short, long, default_value = "data/raw/Video_Game_Sales_as_of_Jan_2017.csv")]
    pub input: PathBuf,

    /// Directory for the cleaned table and the statistics table
    #[arg(short, long, default_value = "outputs")]
    pub output_dir: PathBuf,

    /// Directory for chart images.
    /// Defaults to a 'charts' directory inside the output directory.
    #[arg(long)]
    pub charts_dir: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long, default_value = "false")]
    pub no_charts: bool,
}

impl Cli {
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Path of the cleaned table
    pub fn cleaned_output_path(&self) -> PathBuf {
        self.output_dir.join(CLEANED_FILE_NAME)
    }

    /// Path of the descriptive statistics table
    pub fn statistics_output_path(&self) -> PathBuf {
        self.output_dir.join(STATISTICS_FILE_NAME)
    }

    /// Chart directory, or None when charts are disabled
    pub fn charts_path(&self) -> Option<PathBuf> {
        if self.no_charts {
            return None;
        }
        Some(
            self.charts_dir
                .clone()
                .unwrap_or_else(|| self.output_dir.join("charts")),
        )
    }
}
