//! Core contracts for valx.
//!
//! This crate contains:
//! - Statement tables and the file readers that load them
//! - Line item resolution with fallback series
//! - Free cash flow schedule and DCF valuation
//! - Configuration, response envelope and structured errors

pub mod cash_flow;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod pipeline;
pub mod reader;
pub mod resolver;
pub mod statement;
pub mod valuation;

pub use cash_flow::{CashFlowPeriod, FreeCashFlowSchedule};
pub use config::{AssumptionDefaults, InputLimits, ValuationConfig};
pub use domain::{FinancialSeries, LineItem, StatementKind, UtcDateTime};
pub use envelope::{Envelope, EnvelopeMeta};
pub use error::{CoreError, ValidationError};
pub use pipeline::{
    schedule_workbook, value_workbook, PipelineOutcome, ScheduleReport, ValuationReport,
};
pub use reader::{
    read_csv_table, read_json_workbook, read_spreadsheet_workbook, read_statement_csvs,
    read_workbook,
};
pub use resolver::{FieldOrigin, ResolvedField, ResolvedInputs};
pub use statement::{StatementTable, Workbook};
pub use valuation::{value_schedule, ValuationAssumptions, ValuationResult};
