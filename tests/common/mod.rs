//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Header row of the sales CSV
pub const SALES_HEADER: &str = "Name,Platform,Year_of_Release,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales,Critic_Score,Critic_Count,User_Score,User_Count,Rating";

/// Six rows of sales data with known characteristics
///
/// - rows 2 and 4 have no scores, counts or rating
/// - row 4 has no release year
/// - user scores are on the 0-10 scale (max 8.3)
pub const SALES_ROWS: [&str; 6] = [
    "Wii Sports,Wii,2006,Sports,Nintendo,41.36,28.96,3.77,8.45,82.53,76,51,8,322,E",
    "Super Mario Bros.,NES,1985,Platform,Nintendo,29.08,3.58,6.81,0.77,40.24,,,,,",
    "Mario Kart Wii,Wii,2008,Racing,Nintendo,15.68,12.76,3.79,3.29,35.52,82,73,8.3,709,E",
    "Pokemon Red,GB,,Role-Playing,Nintendo,11.27,8.89,10.22,1,31.37,,,,,",
    "Grand Theft Auto V,PS3,2013,Action,Take-Two Interactive,7.02,9.09,0.98,3.96,21.04,97,50,8.2,3994,M",
    "Call of Duty: Modern Warfare 3,X360,2011,Shooter,Activision,9.04,4.24,0.13,1.32,14.73,88,81,3.4,8713,M",
];

/// Write a CSV file from a header and rows into a fresh temp directory
pub fn write_csv(header: &str, rows: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sales.csv");

    let mut content = String::from(header);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    std::fs::write(&path, content).unwrap();

    (temp_dir, path)
}

/// Write the standard six-row sales fixture
pub fn write_sales_csv() -> (TempDir, PathBuf) {
    write_csv(SALES_HEADER, &SALES_ROWS)
}

/// Build a typed sales table the way the loader produces it
///
/// Every column is provided; years are Int32, counts Int64, everything
/// numeric otherwise Float64.
pub fn create_sales_dataframe(
    platforms: &[&str],
    genres: &[&str],
    publishers: &[&str],
    years: &[Option<i32>],
    global_sales: &[f64],
) -> DataFrame {
    let n = platforms.len();
    let names: Vec<String> = (0..n).map(|i| format!("Game {}", i)).collect();
    let regional: Vec<f64> = global_sales.iter().map(|g| g / 4.0).collect();

    df! {
        "Name" => names,
        "Platform" => platforms.to_vec(),
        "Year_of_Release" => years.to_vec(),
        "Genre" => genres.to_vec(),
        "Publisher" => publishers.to_vec(),
        "NA_Sales" => regional.clone(),
        "EU_Sales" => regional.clone(),
        "JP_Sales" => regional.clone(),
        "Other_Sales" => regional,
        "Global_Sales" => global_sales.to_vec(),
        "Critic_Score" => (0..n).map(|i| Some(50.0 + i as f64)).collect::<Vec<Option<f64>>>(),
        "Critic_Count" => (0..n).map(|i| Some(10 + i as i64)).collect::<Vec<Option<i64>>>(),
        "User_Score" => (0..n).map(|i| Some(60.0 + i as f64)).collect::<Vec<Option<f64>>>(),
        "User_Count" => (0..n).map(|i| Some(100 + i as i64)).collect::<Vec<Option<i64>>>(),
        "Rating" => vec![Some("E"); n],
    }
    .unwrap()
}

/// Generate a random sales table of `rows` rows with some missing values
pub fn create_large_sales_dataframe(rows: usize, seed: u64) -> DataFrame {
    use rand::prelude::*;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let platforms = ["Wii", "PS2", "X360", "DS", "PC"];
    let genres = ["Action", "Sports", "Shooter", "Racing", "Puzzle"];
    let publishers = ["Nintendo", "EA", "Activision", "Sony", "Ubisoft", "Sega"];

    let mut columns: Vec<Column> = Vec::with_capacity(15);
    columns.push(Column::new(
        "Name".into(),
        (0..rows).map(|i| format!("Game {}", i)).collect::<Vec<_>>(),
    ));
    columns.push(Column::new(
        "Platform".into(),
        (0..rows).map(|_| *platforms.choose(&mut rng).unwrap()).collect::<Vec<_>>(),
    ));
    columns.push(Column::new(
        "Year_of_Release".into(),
        (0..rows)
            .map(|_| (rng.gen::<f64>() > 0.02).then(|| rng.gen_range(1980..2017)))
            .collect::<Vec<Option<i32>>>(),
    ));
    columns.push(Column::new(
        "Genre".into(),
        (0..rows).map(|_| *genres.choose(&mut rng).unwrap()).collect::<Vec<_>>(),
    ));
    columns.push(Column::new(
        "Publisher".into(),
        (0..rows).map(|_| *publishers.choose(&mut rng).unwrap()).collect::<Vec<_>>(),
    ));

    let regions: Vec<Vec<f64>> = (0..4)
        .map(|_| (0..rows).map(|_| rng.gen::<f64>() * 2.0).collect())
        .collect();
    let global: Vec<f64> = (0..rows).map(|i| regions.iter().map(|r| r[i]).sum()).collect();
    for (name, values) in ["NA_Sales", "EU_Sales", "JP_Sales", "Other_Sales"]
        .iter()
        .zip(regions)
    {
        columns.push(Column::new((*name).into(), values));
    }
    columns.push(Column::new("Global_Sales".into(), global));

    let mut maybe = |p: f64| rng.gen::<f64>() > p;
    let critic: Vec<Option<f64>> = (0..rows).map(|i| maybe(0.5).then_some(20.0 + (i % 80) as f64)).collect();
    let critic_count: Vec<Option<i64>> = (0..rows).map(|i| maybe(0.5).then_some(5 + (i % 100) as i64)).collect();
    let user: Vec<Option<f64>> = (0..rows).map(|i| maybe(0.4).then_some((i % 100) as f64 / 10.0)).collect();
    let user_count: Vec<Option<i64>> = (0..rows).map(|i| maybe(0.4).then_some(4 + (i % 5000) as i64)).collect();
    let rating: Vec<Option<&str>> = (0..rows).map(|_| maybe(0.4).then_some("E")).collect();

    columns.push(Column::new("Critic_Score".into(), critic));
    columns.push(Column::new("Critic_Count".into(), critic_count));
    columns.push(Column::new("User_Score".into(), user));
    columns.push(Column::new("User_Count".into(), user_count));
    columns.push(Column::new("Rating".into(), rating));

    DataFrame::new(columns).unwrap()
}

/// Assert two floats are equal within a small absolute tolerance
pub fn assert_approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// Float values of a column, missing as None
pub fn f64_values(df: &DataFrame, column: &str) -> Vec<Option<f64>> {
    df.column(column)
        .unwrap()
        .cast(&DataType::Float64)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}
