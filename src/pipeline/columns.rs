//! Fixed column layout of the video game sales dataset

use polars::prelude::DataType;

pub const NAME: &str = "Name";
pub const PLATFORM: &str = "Platform";
pub const YEAR: &str = "Year_of_Release";
pub const GENRE: &str = "Genre";
pub const PUBLISHER: &str = "Publisher";
pub const NA_SALES: &str = "NA_Sales";
pub const EU_SALES: &str = "EU_Sales";
pub const JP_SALES: &str = "JP_Sales";
pub const OTHER_SALES: &str = "Other_Sales";
pub const GLOBAL_SALES: &str = "Global_Sales";
pub const CRITIC_SCORE: &str = "Critic_Score";
pub const CRITIC_COUNT: &str = "Critic_Count";
pub const USER_SCORE: &str = "User_Score";
pub const USER_COUNT: &str = "User_Count";
pub const RATING: &str = "Rating";

/// Placeholder written into missing ratings during cleaning
pub const UNKNOWN_RATING: &str = "Unknown";

/// Header of the input file, in order
pub const EXPECTED_COLUMNS: [&str; 15] = [
    NAME,
    PLATFORM,
    YEAR,
    GENRE,
    PUBLISHER,
    NA_SALES,
    EU_SALES,
    JP_SALES,
    OTHER_SALES,
    GLOBAL_SALES,
    CRITIC_SCORE,
    CRITIC_COUNT,
    USER_SCORE,
    USER_COUNT,
    RATING,
];

/// All five sales columns (millions of units)
pub const SALES_COLUMNS: [&str; 5] = [NA_SALES, EU_SALES, JP_SALES, OTHER_SALES, GLOBAL_SALES];

/// Regional breakdown without the global total
pub const REGIONAL_SALES_COLUMNS: [&str; 4] = [NA_SALES, EU_SALES, JP_SALES, OTHER_SALES];

/// Every numeric column, in table order
pub const NUMERIC_COLUMNS: [&str; 10] = [
    YEAR,
    NA_SALES,
    EU_SALES,
    JP_SALES,
    OTHER_SALES,
    GLOBAL_SALES,
    CRITIC_SCORE,
    CRITIC_COUNT,
    USER_SCORE,
    USER_COUNT,
];

/// Columns of the narrow sales-vs-scores correlation
pub const SCORE_SALES_COLUMNS: [&str; 3] = [GLOBAL_SALES, CRITIC_SCORE, USER_SCORE];

/// Cells holding one of these tokens are read as missing
pub const NULL_TOKENS: [&str; 9] = ["NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "#N/A"];

/// Target dtype of a column after loading
pub fn column_dtype(column: &str) -> DataType {
    match column {
        YEAR => DataType::Int32,
        CRITIC_COUNT | USER_COUNT => DataType::Int64,
        NA_SALES | EU_SALES | JP_SALES | OTHER_SALES | GLOBAL_SALES | CRITIC_SCORE
        | USER_SCORE => DataType::Float64,
        _ => DataType::String,
    }
}
