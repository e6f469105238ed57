//! Tests for the sales dataset loader

use polars::prelude::*;
use vgeda::pipeline::{dataset_shape, load_dataset, read_header, EdaError};

#[path = "common/mod.rs"]
mod common;

use common::{write_csv, write_sales_csv, SALES_HEADER, SALES_ROWS};

#[test]
fn test_load_sales_csv() {
    let (_dir, path) = write_sales_csv();

    let df = load_dataset(&path).unwrap();
    let (rows, cols, memory_mb) = dataset_shape(&df);

    assert_eq!(rows, 6, "Should have 6 data rows");
    assert_eq!(cols, 15, "Should have 15 columns");
    assert!(memory_mb >= 0.0, "Memory estimate should be non-negative");
}

#[test]
fn test_loaded_column_types() {
    let (_dir, path) = write_sales_csv();
    let df = load_dataset(&path).unwrap();

    assert_eq!(df.column("Name").unwrap().dtype(), &DataType::String);
    assert_eq!(df.column("Year_of_Release").unwrap().dtype(), &DataType::Int32);
    assert_eq!(df.column("Global_Sales").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("Critic_Score").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("Critic_Count").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("User_Score").unwrap().dtype(), &DataType::Float64);
    assert_eq!(df.column("User_Count").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("Rating").unwrap().dtype(), &DataType::String);
}

#[test]
fn test_empty_cells_are_missing() {
    let (_dir, path) = write_sales_csv();
    let df = load_dataset(&path).unwrap();

    assert_eq!(df.column("Year_of_Release").unwrap().null_count(), 1);
    assert_eq!(df.column("Critic_Score").unwrap().null_count(), 2);
    assert_eq!(df.column("User_Count").unwrap().null_count(), 2);
    assert_eq!(df.column("Rating").unwrap().null_count(), 2);
    assert_eq!(df.column("Global_Sales").unwrap().null_count(), 0);
}

#[test]
fn test_null_tokens_are_missing() {
    let rows = [
        "A,Wii,2006,Sports,Nintendo,1,1,1,1,4,NA,N/A,NaN,null,E",
        "B,Wii,2007,Sports,Nintendo,1,1,1,1,4,80,10,7.5,20,E",
    ];
    let (_dir, path) = write_csv(SALES_HEADER, &rows);
    let df = load_dataset(&path).unwrap();

    assert_eq!(df.column("Critic_Score").unwrap().null_count(), 1);
    assert_eq!(df.column("Critic_Count").unwrap().null_count(), 1);
    assert_eq!(df.column("User_Score").unwrap().null_count(), 1);
    assert_eq!(df.column("User_Count").unwrap().null_count(), 1);
}

#[test]
fn test_missing_file_is_file_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("does_not_exist.csv");

    let result = load_dataset(&path);
    assert!(
        matches!(result, Err(EdaError::File { .. })),
        "Missing file should be a File error"
    );
}

#[test]
fn test_wrong_header_is_header_error() {
    let header = SALES_HEADER.replace("Global_Sales", "World_Sales");
    let (_dir, path) = write_csv(&header, &SALES_ROWS);

    match load_dataset(&path) {
        Err(EdaError::Header { expected, found }) => {
            assert_eq!(expected.len(), 15);
            assert!(found.contains(&"World_Sales".to_string()));
        }
        other => panic!("Expected Header error, got {:?}", other),
    }
}

#[test]
fn test_extra_column_is_header_error() {
    let header = format!("{},Extra", SALES_HEADER);
    let rows: Vec<String> = SALES_ROWS.iter().map(|r| format!("{},x", r)).collect();
    let rows: Vec<&str> = rows.iter().map(|r| r.as_str()).collect();
    let (_dir, path) = write_csv(&header, &rows);

    assert!(matches!(
        load_dataset(&path),
        Err(EdaError::Header { .. })
    ));
}

#[test]
fn test_non_numeric_sales_is_parse_error() {
    let rows = ["A,Wii,2006,Sports,Nintendo,lots,1,1,1,4,80,10,7.5,20,E"];
    let (_dir, path) = write_csv(SALES_HEADER, &rows);

    match load_dataset(&path) {
        Err(EdaError::Parse { column, .. }) => assert_eq!(column, "NA_Sales"),
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

#[test]
fn test_non_integer_year_is_parse_error() {
    let rows = ["A,Wii,2006.5,Sports,Nintendo,1,1,1,1,4,80,10,7.5,20,E"];
    let (_dir, path) = write_csv(SALES_HEADER, &rows);

    assert!(matches!(
        load_dataset(&path),
        Err(EdaError::Parse { .. })
    ));
}

#[test]
fn test_read_header() {
    let (_dir, path) = write_sales_csv();
    let header = read_header(&path).unwrap();

    assert_eq!(header.len(), 15);
    assert_eq!(header[0], "Name");
    assert_eq!(header[14], "Rating");
}
