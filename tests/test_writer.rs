//! Tests for the cleaned table and statistics CSV outputs

use vgeda::pipeline::{clean_dataset, describe, load_dataset, ColumnSummary};
use vgeda::report::{statistics_frame, write_cleaned_table, write_descriptive_statistics};

#[path = "common/mod.rs"]
mod common;

use common::{write_csv, write_sales_csv, SALES_HEADER};

#[test]
fn test_cleaned_table_round_trip() {
    let (dir, path) = write_sales_csv();
    let (cleaned, _) = clean_dataset(load_dataset(&path).unwrap()).unwrap();

    let out = dir.path().join("outputs").join("vgames_cleaned.csv");
    write_cleaned_table(&cleaned, &out).unwrap();

    let reloaded = load_dataset(&out).unwrap();
    assert_eq!(reloaded.shape(), cleaned.shape());
    assert_eq!(reloaded.get_column_names(), cleaned.get_column_names());
    assert_eq!(
        reloaded.column("Rating").unwrap().null_count(),
        0,
        "Unknown placeholder should survive the round trip"
    );
    assert!(
        reloaded.equals_missing(&cleaned),
        "Reloaded values should equal the written ones"
    );
}

#[test]
fn test_cleaned_table_has_header_and_no_index() {
    let (dir, path) = write_sales_csv();
    let (cleaned, _) = clean_dataset(load_dataset(&path).unwrap()).unwrap();

    let out = dir.path().join("vgames_cleaned.csv");
    write_cleaned_table(&cleaned, &out).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(lines.next().unwrap(), SALES_HEADER);
    assert_eq!(lines.count(), 5);
}

#[test]
fn test_existing_output_is_overwritten() {
    let (dir, _) = write_csv(SALES_HEADER, &[]);
    let out = dir.path().join("vgames_cleaned.csv");
    std::fs::write(&out, "stale content that is much longer than the new file\n".repeat(50)).unwrap();

    let df = common::create_sales_dataframe(
        &["Wii"],
        &["Sports"],
        &["Nintendo"],
        &[Some(2006)],
        &[1.0],
    );
    write_cleaned_table(&df, &out).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_statistics_layout() {
    let stats = vec![
        ColumnSummary::from_values("NA_Sales", &[1.0, 2.0, 3.0]),
        ColumnSummary::from_values("EU_Sales", &[4.0, 5.0]),
    ];

    let frame = statistics_frame(&stats).unwrap();
    assert_eq!(frame.shape(), (8, 3));
    assert_eq!(frame.get_column_names(), &["statistic", "NA_Sales", "EU_Sales"]);

    let labels: Vec<Option<&str>> = frame.column("statistic").unwrap().str().unwrap().into_iter().collect();
    assert_eq!(
        labels,
        ["count", "mean", "std", "min", "25%", "50%", "75%", "max"]
            .iter()
            .map(|s| Some(*s))
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_write_descriptive_statistics() {
    let (dir, path) = write_sales_csv();
    let (cleaned, _) = clean_dataset(load_dataset(&path).unwrap()).unwrap();
    let stats = describe(&cleaned).unwrap();

    let out = dir.path().join("descriptive_statistics.csv");
    write_descriptive_statistics(&stats, &out).unwrap();

    let content = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 9, "Header plus eight statistics");
    assert!(lines[0].starts_with("statistic,Year_of_Release,NA_Sales"));
    assert!(lines[1].starts_with("count,5"));
    assert!(lines[8].starts_with("max,"));
}
