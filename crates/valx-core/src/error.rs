use std::path::PathBuf;

use thiserror::Error;

/// Validation and contract errors exposed by `valx-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("discount rate must lie strictly between 0 and 1, got {value}")]
    DiscountRateOutOfRange { value: f64 },
    #[error("terminal growth rate must be non-negative, got {value}")]
    NegativeGrowthRate { value: f64 },
    #[error(
        "discount rate {discount_rate} must exceed terminal growth rate {growth_rate}"
    )]
    DegenerateAssumptions { discount_rate: f64, growth_rate: f64 },
    #[error("share count must be positive")]
    ZeroShareCount,
    #[error("{field} {value} is outside the allowed range [{min}, {max}]")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("share count {value} is below the minimum of {min}")]
    ShareCountBelowMinimum { value: u64, min: u64 },

    #[error("line item series have mismatched lengths: {lengths}")]
    MismatchedLengths { lengths: String },
    #[error("series for '{field}' has no periods")]
    EmptySeries { field: &'static str },

    #[error("sheet name cannot be empty")]
    EmptySheetName,
    #[error("sheet '{sheet}' has duplicate column '{column}'")]
    DuplicateColumn { sheet: String, column: String },
    #[error("column '{column}' in sheet '{sheet}' has {len} rows, expected {expected}")]
    RaggedColumn {
        sheet: String,
        column: String,
        len: usize,
        expected: usize,
    },
    #[error("non-numeric value '{value}' in sheet '{sheet}', column '{column}', row {row}")]
    NonNumericCell {
        sheet: String,
        column: String,
        row: usize,
        value: String,
    },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("malformed input '{}': {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read spreadsheet '{}': {source}", .path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
